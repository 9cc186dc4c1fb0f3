//! Builders for hand-crafted games used by tests, demos, and admin tooling.

use time::OffsetDateTime;

use super::cards_parsing::parse_cards;
use super::cards_types::{Card, Role};
use super::state::{Game, GameOptions, GameState, Player, PlayerId};

/// Centralized helper for parsing hardcoded card letters.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded compact hands such as `"CSRRR"`.
    ///
    /// Only for letters known to be valid at the call site: fixtures, demo
    /// data, and test scenarios.
    pub fn parse_hardcoded(letters: &str) -> Vec<Card> {
        #[allow(clippy::expect_used)]
        parse_cards(letters).expect("hardcoded valid card letters")
    }
}

/// An in-progress game built from compact hands.
///
/// Every player is a cultist and the first player holds the flashlight.
///
/// ```
/// use lovecraft::domain::fixtures::make_game;
///
/// let game = make_game("g", 1, &[("p0", "CSRRR"), ("p1", "RRRRR")], "");
/// assert_eq!(game.current_investigator_id.as_deref(), Some("p0"));
/// assert_eq!(game.player_list[0].hand.len(), 5);
/// ```
pub fn make_game(game_id: &str, round: u8, hands: &[(&str, &str)], visible_cards: &str) -> Game {
    let mut builder = GameBuilder::new(game_id).round(round);
    for (player_id, hand) in hands {
        builder = builder.player(player_id, Role::Cultist, hand);
    }
    let mut game = builder.visible(visible_cards).build();
    game.current_investigator_id = game.player_list.first().map(|p| p.id.clone());
    game
}

/// Step-by-step construction of arbitrary games.
pub struct GameBuilder {
    game: Game,
}

impl GameBuilder {
    /// Starts from an in-progress round-1 game with no players.
    pub fn new(game_id: &str) -> Self {
        let mut game = Game::new(game_id, GameOptions::default(), OffsetDateTime::UNIX_EPOCH);
        game.state = GameState::InProgress;
        Self { game }
    }

    pub fn state(mut self, state: GameState) -> Self {
        self.game.state = state;
        self
    }

    pub fn round(mut self, round: u8) -> Self {
        self.game.round = round;
        self
    }

    pub fn options(mut self, options: GameOptions) -> Self {
        self.game.options = options;
        self
    }

    pub fn player(mut self, id: &str, role: Role, hand: &str) -> Self {
        let mut player = Player::new(id);
        player.role = role;
        player.hand = CardFixtures::parse_hardcoded(hand);
        self.game.player_list.push(player);
        self
    }

    pub fn visible(mut self, letters: &str) -> Self {
        self.game.visible_cards = CardFixtures::parse_hardcoded(letters);
        self
    }

    pub fn discards(mut self, letters: &str) -> Self {
        self.game.discards = CardFixtures::parse_hardcoded(letters);
        self
    }

    pub fn investigator(mut self, player_id: &str) -> Self {
        self.game.current_investigator_id = Some(PlayerId::from(player_id));
        self
    }

    pub fn paranoid(mut self, player_id: &str) -> Self {
        self.game.paranoid_player_id = Some(PlayerId::from(player_id));
        self
    }

    pub fn build(self) -> Game {
        self.game
    }
}
