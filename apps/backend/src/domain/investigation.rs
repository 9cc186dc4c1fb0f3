//! The turn engine: resolving a single investigation.
//!
//! The current investigator picks a card from another player's hand. The
//! card is revealed, its effect applied, and the flashlight moves on.
//! Revealing enough elder signs wins the game for the investigators;
//! revealing every Cthulhu, or running out of rounds, wins it for the
//! cultists.

use rand::Rng;
use tracing::debug;

use crate::domain::actions::{Action, PlayCard};
use crate::domain::dealing::redeal;
use crate::domain::state::{require_game, Game, GameState, Secret};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome of resolving one investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    pub card: Card,
    pub round_ended: bool,
}

pub fn on_play_card<R: Rng + ?Sized>(
    game: Option<Game>,
    action: &PlayCard,
    rng: &mut R,
) -> Result<Game, DomainError> {
    let mut game = require_game(game, &action.game_id)?;
    play_card(&mut game, action, rng)?;
    Ok(game)
}

/// Validate and resolve `action` against `game`.
///
/// On error `game` is untouched; every check runs before the first
/// mutation.
pub fn play_card<R: Rng + ?Sized>(
    game: &mut Game,
    action: &PlayCard,
    rng: &mut R,
) -> Result<PlayCardResult, DomainError> {
    let (source_idx, target_idx) = validate_play(game, action)?;

    let card = game.player_list[target_idx]
        .hand
        .remove(action.card_number - 1);
    game.visible_cards.push(card);
    let revealed = game.visible_cards.len();
    debug!(
        game_id = %game.id,
        source = %action.source_player,
        target = %action.target_player,
        %card,
        "card revealed"
    );

    match card {
        Card::FutileInvestigation | Card::InsanitysGrasp => {}
        Card::ElderSign => resolve_elder_sign(game),
        Card::Cthulhu => resolve_cthulhu(game),
        Card::EvilPresence => {
            let hand = std::mem::take(&mut game.player_list[target_idx].hand);
            game.discards.extend(hand);
        }
        Card::Mirage => resolve_mirage(game),
        Card::Paranoia => {
            game.paranoid_player_id = Some(action.target_player.clone());
        }
        Card::PrivateEye => {
            let role = game.player_list[target_idx].role;
            game.player_list[source_idx].secrets.push(Secret::Role {
                player: action.target_player.clone(),
                role,
            });
        }
    }

    // A mirage swap replaces an earlier reveal instead of adding one, so it
    // cannot complete a round.
    let round_ended = game.visible_cards.len() == revealed && end_round_if_complete(game, rng);

    game.current_investigator_id = match (&game.paranoid_player_id, round_ended) {
        (Some(paranoid), false) => Some(paranoid.clone()),
        _ => Some(action.target_player.clone()),
    };

    game.history.push(Action::PlayCard(action.clone()));
    Ok(PlayCardResult { card, round_ended })
}

/// Check every precondition and return the source and target indices.
fn validate_play(game: &Game, action: &PlayCard) -> Result<(usize, usize), DomainError> {
    if game.state != GameState::InProgress {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{} is not in progress.", game.id),
        ));
    }

    let target_idx = game.require_player_index(&action.target_player)?;
    let hand_len = game.player_list[target_idx].hand.len();
    if action.card_number < 1 {
        return Err(DomainError::validation(
            ValidationKind::CardNumberOutOfRange,
            "Card number must be >= 1.",
        ));
    }
    if action.card_number > hand_len {
        return Err(DomainError::validation(
            ValidationKind::CardNumberOutOfRange,
            format!("{} only has {hand_len} cards", action.target_player),
        ));
    }

    if game.current_investigator_id.as_deref() != Some(action.source_player.as_str()) {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("{} is not the current investigator.", action.source_player),
        ));
    }
    if action.source_player == action.target_player {
        return Err(DomainError::validation(
            ValidationKind::SelfInvestigation,
            "You cannot investigate yourself.",
        ));
    }
    // A forced game may name an investigator who is not seated.
    let source_idx = game.require_player_index(&action.source_player)?;

    Ok((source_idx, target_idx))
}

fn resolve_elder_sign(game: &mut Game) {
    if game.visible_elder_signs() >= game.player_list.len() {
        game.state = GameState::InvestigatorsWon;
    }
}

fn resolve_cthulhu(game: &mut Game) {
    let hidden = game
        .player_list
        .iter()
        .any(|p| p.hand.contains(&Card::Cthulhu));
    if !hidden {
        game.state = GameState::CultistsWon;
    }
}

/// Swap the most recent earlier elder sign for the mirage just revealed.
/// Revealed in the final round, a mirage hands the game to the cultists.
fn resolve_mirage(game: &mut Game) {
    let earlier = game.visible_cards.len() - 1;
    let swapped = game.visible_cards[..earlier]
        .iter()
        .rposition(|c| *c == Card::ElderSign);

    if let Some(pos) = swapped {
        game.discards.push(Card::ElderSign);
        game.visible_cards[pos] = Card::Mirage;
        game.visible_cards.pop();
    }

    if game.is_final_round() {
        game.state = GameState::CultistsWon;
    }
}

/// Close the round if every player has been investigated once since the
/// last boundary. Returns whether the round ended.
fn end_round_if_complete<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> bool {
    if game.state != GameState::InProgress || !game.is_round_boundary() {
        return false;
    }

    if game.is_final_round() {
        game.state = GameState::CultistsWon;
        debug!(game_id = %game.id, "final round over without enough elder signs");
        return true;
    }

    game.round += 1;
    game.paranoid_player_id = None;
    redeal(game, rng);
    debug!(game_id = %game.id, round = game.round, "round ended, cards redealt");
    true
}
