//! Shuffling, dealing, and the random parts of game setup.
//!
//! Every function takes its RNG explicitly so callers can seed it
//! (`ChaCha8Rng::seed_from_u64`) and get reproducible deals.

use rand::Rng;

use crate::domain::rules::{PlayerSetup, SPECIAL_CARDS};
use crate::domain::state::{Game, GameOptions, Player};
use crate::domain::{Card, Role};
use crate::errors::domain::{DomainError, ValidationKind};

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle `cards`, clear every hand, then deal one card at a time in
/// player-list order until the pool is empty.
///
/// Leftover cards go to the earliest players, so hand sizes differ by at
/// most one. With no players there is nobody to deal to and the pool is
/// dropped.
pub fn deal_cards_to_players<R: Rng + ?Sized>(
    players: &mut [Player],
    mut cards: Vec<Card>,
    rng: &mut R,
) {
    shuffle(&mut cards, rng);

    for player in players.iter_mut() {
        player.hand.clear();
    }
    if players.is_empty() {
        return;
    }

    let count = players.len();
    for (i, card) in cards.into_iter().rev().enumerate() {
        players[i % count].hand.push(card);
    }
}

/// Take every card still in a hand plus every discard, leaving hands and
/// the discard pile empty.
pub fn gather_round_pool(game: &mut Game) -> Vec<Card> {
    let mut pool = Vec::with_capacity(game.cards_in_hands() + game.discards.len());
    for player in game.player_list.iter_mut() {
        pool.append(&mut player.hand);
    }
    pool.append(&mut game.discards);
    pool
}

/// Gather the round pool and deal it back out.
pub fn redeal<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) {
    let pool = gather_round_pool(game);
    deal_cards_to_players(&mut game.player_list, pool, rng);
}

/// Hand out `setup.investigators` investigator and `setup.cultists` cultist
/// roles at random, one per player.
pub fn assign_roles<R: Rng + ?Sized>(
    players: &mut [Player],
    setup: &PlayerSetup,
    rng: &mut R,
) -> Result<(), DomainError> {
    let mut roles = Vec::with_capacity(setup.investigators + setup.cultists);
    roles.extend(std::iter::repeat_n(Role::Investigator, setup.investigators));
    roles.extend(std::iter::repeat_n(Role::Cultist, setup.cultists));
    shuffle(&mut roles, rng);

    for player in players.iter_mut() {
        player.role = roles.pop().ok_or_else(|| {
            DomainError::validation(ValidationKind::RolesExhausted, "Ran out of roles.")
        })?;
    }
    Ok(())
}

/// Build the unshuffled starting deck: Cthulhus, elder signs, a random
/// selection of special cards, then rocks up to the deck size.
pub fn starting_deck<R: Rng + ?Sized>(
    setup: &PlayerSetup,
    options: &GameOptions,
    rng: &mut R,
) -> Result<Vec<Card>, DomainError> {
    let deck_size = setup.deck_size();
    let special_count = options.special_card_count.min(SPECIAL_CARDS.len());
    let fixed = options.cthulhu_count + setup.elder_signs + special_count;
    if fixed > deck_size {
        return Err(DomainError::validation(
            ValidationKind::InvalidOptions,
            format!(
                "{} Cthulhu, {} elder signs and {} special cards do not fit in a {}-card deck",
                options.cthulhu_count, setup.elder_signs, special_count, deck_size
            ),
        ));
    }

    let mut specials = SPECIAL_CARDS;
    shuffle(&mut specials, rng);

    let mut deck = Vec::with_capacity(deck_size);
    deck.extend(std::iter::repeat_n(Card::Cthulhu, options.cthulhu_count));
    deck.extend(std::iter::repeat_n(Card::ElderSign, setup.elder_signs));
    deck.extend_from_slice(&specials[..special_count]);
    deck.extend(std::iter::repeat_n(
        Card::FutileInvestigation,
        deck_size - deck.len(),
    ));
    Ok(deck)
}
