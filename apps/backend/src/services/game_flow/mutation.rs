use std::sync::atomic::Ordering;

use tracing::{debug, info};

use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::{command_rng, reduce, Action, Game};
use crate::error::AppError;
use crate::services::game_flow::GameFlowService;
use crate::store::GameStore;

/// Outcome of a committed command.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMutationResult {
    pub game: Game,
    pub transitions: Vec<GameTransition>,
}

impl<S: GameStore> GameFlowService<S> {
    /// Reduce `action` against the stored game and persist the result.
    ///
    /// `explicit` transitions are appended to the ones derived from the
    /// before/after lifecycle views.
    pub(super) async fn run_mutation(
        &self,
        action: Action,
        explicit: Vec<GameTransition>,
    ) -> Result<GameMutationResult, AppError> {
        let game_id = action.game_id().to_string();
        let name = action.name();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let mut rng = command_rng(self.base_seed, sequence);

        debug!(game_id = %game_id, action = name, sequence, "Applying command");

        let update = self
            .store
            .apply_to(
                &game_id,
                Box::new(move |game| reduce(game, &action, &mut rng)),
            )
            .await
            .map_err(|e| {
                debug!(game_id = %game_id, action = name, code = %e.code(), "Command rejected");
                AppError::from(e)
            })?;

        let before = update.previous.as_ref().map(GameLifecycleView::of);
        let after = GameLifecycleView::of(&update.current);
        let mut transitions = derive_game_transitions(before.as_ref(), &after);
        transitions.extend(explicit);

        for transition in &transitions {
            info!(game_id = %game_id, action = name, ?transition, "Game transition");
        }

        Ok(GameMutationResult {
            game: update.current,
            transitions,
        })
    }
}
