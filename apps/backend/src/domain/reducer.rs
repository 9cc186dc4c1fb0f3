use rand::Rng;

use crate::domain::actions::Action;
use crate::domain::investigation::on_play_card;
use crate::domain::lifecycle::{
    on_force_game_state, on_join_game, on_new_game, on_next_round, on_restart_game,
    on_set_investigator, on_start_game, on_update_game_options,
};
use crate::domain::state::Game;
use crate::errors::domain::DomainError;

/// Apply any action to the current game.
pub fn reduce<R: Rng + ?Sized>(
    game: Option<Game>,
    action: &Action,
    rng: &mut R,
) -> Result<Game, DomainError> {
    match action {
        Action::NewGame(a) => on_new_game(game, a),
        Action::JoinGame(a) => on_join_game(game, a),
        Action::UpdateGameOptions(a) => on_update_game_options(game, a),
        Action::StartGame(a) => on_start_game(game, a, rng),
        Action::RestartGame(a) => on_restart_game(game, a, rng),
        Action::NextRound(a) => on_next_round(game, a, rng),
        Action::PlayCard(a) => on_play_card(game, a, rng),
        Action::SetInvestigator(a) => on_set_investigator(game, a),
        Action::ForceGameState(a) => on_force_game_state(game, a),
    }
}
