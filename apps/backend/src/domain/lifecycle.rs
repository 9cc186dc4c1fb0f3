//! Lifecycle reducers: create, join, configure, start, restart, advance
//! rounds, and the admin escape hatches.
//!
//! Each reducer takes the current game by value (`None` when it does not
//! exist yet) and returns the next game or an error. A failing reducer
//! leaves nothing behind: the store only persists `Ok` results.

use rand::Rng;
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::actions::{
    Action, ForceGameState, JoinGame, NewGame, NextRound, RestartGame, SetInvestigator, StartGame,
    UpdateGameOptions,
};
use crate::domain::dealing::{assign_roles, deal_cards_to_players, redeal, starting_deck};
use crate::domain::rules::{setup_for_player_count, MAX_PLAYERS, MAX_ROUNDS, MIN_PLAYERS};
use crate::domain::state::{require_game, Game, GameState, Player};
use crate::domain::Role;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

pub fn on_new_game(game: Option<Game>, action: &NewGame) -> Result<Game, DomainError> {
    if let Some(existing) = game {
        return Err(DomainError::conflict(
            ConflictKind::GameExists,
            format!("Game {} already exists.", existing.id),
        ));
    }

    let game = Game::new(
        action.game_id.clone(),
        action.options.unwrap_or_default(),
        OffsetDateTime::now_utc(),
    );

    // The creator's join is recorded ahead of the creation itself.
    let mut game = match &action.player_id {
        Some(player_id) => on_join_game(
            Some(game),
            &JoinGame {
                game_id: action.game_id.clone(),
                player_id: player_id.clone(),
            },
        )?,
        None => game,
    };
    game.history.push(Action::NewGame(action.clone()));
    Ok(game)
}

pub fn on_join_game(game: Option<Game>, action: &JoinGame) -> Result<Game, DomainError> {
    let mut game = require_game(game, &action.game_id)?;
    if game.has_player(&action.player_id) {
        return Err(DomainError::conflict(
            ConflictKind::PlayerAlreadyJoined,
            format!("{} is already in {}", action.player_id, game.id),
        ));
    }
    require_not_started(&game, "is already in progress.")?;

    game.player_list.push(Player::new(action.player_id.clone()));
    game.history.push(Action::JoinGame(action.clone()));
    Ok(game)
}

/// Replace the options wholesale. Only allowed before the game starts.
pub fn on_update_game_options(
    game: Option<Game>,
    action: &UpdateGameOptions,
) -> Result<Game, DomainError> {
    let mut game = require_game(game, &action.game_id)?;
    require_not_started(&game, "is already in progress.")?;

    game.options = action.options;
    game.history.push(Action::UpdateGameOptions(action.clone()));
    Ok(game)
}

pub fn on_start_game<R: Rng + ?Sized>(
    game: Option<Game>,
    action: &StartGame,
    rng: &mut R,
) -> Result<Game, DomainError> {
    let mut game = require_game(game, &action.game_id)?;
    require_not_started(&game, "has already been started.")?;

    start_game(&mut game, rng)?;
    game.history.push(Action::StartGame(action.clone()));
    Ok(game)
}

/// Throw the old game away and start a fresh one with the same roster and
/// options. The fresh game starts with an empty history.
pub fn on_restart_game<R: Rng + ?Sized>(
    game: Option<Game>,
    action: &RestartGame,
    rng: &mut R,
) -> Result<Game, DomainError> {
    let old = require_game(game, &action.game_id)?;

    let mut fresh = Game::new(old.id, old.options, OffsetDateTime::now_utc());
    fresh.player_list = old
        .player_list
        .into_iter()
        .map(|player| Player::new(player.id))
        .collect();

    start_game(&mut fresh, rng)?;
    Ok(fresh)
}

/// Resume a paused game: collect every card still in play and deal the next
/// round.
pub fn on_next_round<R: Rng + ?Sized>(
    game: Option<Game>,
    action: &NextRound,
    rng: &mut R,
) -> Result<Game, DomainError> {
    let mut game = require_game(game, &action.game_id)?;
    if game.state != GameState::Paused {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!(
                "Game must be paused to go to the next round, but was in state {}",
                game.state
            ),
        ));
    }
    if game.round >= MAX_ROUNDS {
        return Err(DomainError::validation(
            ValidationKind::RoundLimitReached,
            format!("{} is already on the final round.", game.id),
        ));
    }

    game.state = GameState::InProgress;
    game.paranoid_player_id = None;
    game.round += 1;
    redeal(&mut game, rng);
    debug!(game_id = %game.id, round = game.round, "next round dealt");

    game.history.push(Action::NextRound(action.clone()));
    Ok(game)
}

/// Replace the game wholesale, bypassing every rule.
pub fn on_force_game_state(
    _game: Option<Game>,
    action: &ForceGameState,
) -> Result<Game, DomainError> {
    Ok((*action.game).clone())
}

/// Hand the flashlight to a specific player, bypassing turn order.
pub fn on_set_investigator(
    game: Option<Game>,
    action: &SetInvestigator,
) -> Result<Game, DomainError> {
    let mut game = require_game(game, &action.game_id)?;
    let target = game.require_player(&action.target_player)?.id.clone();
    game.current_investigator_id = Some(target);
    Ok(game)
}

fn require_not_started(game: &Game, reason: &str) -> Result<(), DomainError> {
    if game.state != GameState::NotStarted {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{} {reason}", game.id),
        ));
    }
    Ok(())
}

/// Pick the first investigator, assign roles, deal the starting deck.
fn start_game<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Result<(), DomainError> {
    let player_count = game.player_list.len();
    let setup = setup_for_player_count(player_count).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "We only support {MIN_PLAYERS}-{MAX_PLAYERS} players at this time. \
                 {} has {player_count}.",
                game.id
            ),
        )
    })?;

    let starting = rng.random_range(0..player_count);
    game.current_investigator_id = Some(game.player_list[starting].id.clone());

    for player in game.player_list.iter_mut() {
        player.role = Role::NotSet;
        player.secrets.clear();
    }
    assign_roles(&mut game.player_list, &setup, rng)?;

    let deck = starting_deck(&setup, &game.options, rng)?;
    deal_cards_to_players(&mut game.player_list, deck, rng);

    game.round = 1;
    game.state = GameState::InProgress;
    debug!(
        game_id = %game.id,
        players = player_count,
        first = ?game.current_investigator_id,
        "game started"
    );
    Ok(())
}
