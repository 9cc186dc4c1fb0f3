// apps/backend/src/domain/game_transition.rs

use crate::domain::state::{Game, GameState, PlayerId};

/// The slice of a game that lifecycle transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub round: u8,
    pub investigator: Option<PlayerId>,
    pub state: GameState,
    pub players: Vec<PlayerId>,
}

impl GameLifecycleView {
    pub fn of(game: &Game) -> Self {
        Self {
            round: game.round,
            investigator: game.current_investigator_id.clone(),
            state: game.state,
            players: game.player_list.iter().map(|p| p.id.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a player id appeared in the roster.
    PlayerJoined { player_id: PlayerId },

    /// Edge-triggered: NotStarted -> InProgress
    GameStarted,

    /// Edge-triggered: the flashlight moved to a specific player.
    InvestigatorBecame { player_id: PlayerId },

    /// Edge-triggered: a new round was dealt.
    RoundAdvanced { round: u8 },

    /// Edge-triggered: !Paused -> Paused
    RoundPaused,

    /// Edge-triggered: non-terminal -> InvestigatorsWon/CultistsWon
    GameEnded { outcome: GameState },

    /// Explicit: the game was thrown away and started again.
    GameRestarted,
}

/// Derive domain transitions from before/after lifecycle state.
///
/// `before` is `None` when the game did not exist yet.
pub fn derive_game_transitions(
    before: Option<&GameLifecycleView>,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Roster growth
    for player_id in &after.players {
        if !before.is_some_and(|b| b.players.contains(player_id)) {
            transitions.push(GameTransition::PlayerJoined {
                player_id: player_id.clone(),
            });
        }
    }

    let before_state = before.map(|b| b.state);

    // 2. Game start
    if before_state == Some(GameState::NotStarted) && after.state == GameState::InProgress {
        transitions.push(GameTransition::GameStarted);
    }

    // 3. Flashlight moved
    if let Some(player_id) = &after.investigator {
        if before.and_then(|b| b.investigator.as_ref()) != Some(player_id) {
            transitions.push(GameTransition::InvestigatorBecame {
                player_id: player_id.clone(),
            });
        }
    }

    // 4. New round dealt
    if let Some(b) = before {
        if after.round > b.round {
            transitions.push(GameTransition::RoundAdvanced { round: after.round });
        }
    }

    // 5. Paused
    if after.state == GameState::Paused && before_state != Some(GameState::Paused) {
        transitions.push(GameTransition::RoundPaused);
    }

    // 6. Game end
    if after.state.is_terminal() && !before_state.is_some_and(GameState::is_terminal) {
        transitions.push(GameTransition::GameEnded {
            outcome: after.state,
        });
    }

    transitions
}
