//! Commands accepted by the reducers. Accepted commands are also the
//! entries of a game's history.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Game, GameId, GameOptions, PlayerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub game_id: GameId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GameOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGame {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameOptions {
    pub game_id: GameId,
    pub options: GameOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGame {
    pub game_id: GameId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartGame {
    pub game_id: GameId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRound {
    pub game_id: GameId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayCard {
    pub game_id: GameId,
    pub source_player: PlayerId,
    pub target_player: PlayerId,
    /// 1-based position in the target's hand.
    pub card_number: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInvestigator {
    pub game_id: GameId,
    pub target_player: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceGameState {
    pub game: Box<Game>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    NewGame(NewGame),
    JoinGame(JoinGame),
    UpdateGameOptions(UpdateGameOptions),
    StartGame(StartGame),
    RestartGame(RestartGame),
    NextRound(NextRound),
    PlayCard(PlayCard),
    SetInvestigator(SetInvestigator),
    ForceGameState(ForceGameState),
}

impl Action {
    /// The game this action targets.
    pub fn game_id(&self) -> &str {
        match self {
            Action::NewGame(a) => &a.game_id,
            Action::JoinGame(a) => &a.game_id,
            Action::UpdateGameOptions(a) => &a.game_id,
            Action::StartGame(a) => &a.game_id,
            Action::RestartGame(a) => &a.game_id,
            Action::NextRound(a) => &a.game_id,
            Action::PlayCard(a) => &a.game_id,
            Action::SetInvestigator(a) => &a.game_id,
            Action::ForceGameState(a) => &a.game.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::NewGame(_) => "new_game",
            Action::JoinGame(_) => "join_game",
            Action::UpdateGameOptions(_) => "update_game_options",
            Action::StartGame(_) => "start_game",
            Action::RestartGame(_) => "restart_game",
            Action::NextRound(_) => "next_round",
            Action::PlayCard(_) => "play_card",
            Action::SetInvestigator(_) => "set_investigator",
            Action::ForceGameState(_) => "force_game_state",
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Action {
                fn from(action: $variant) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    NewGame,
    JoinGame,
    UpdateGameOptions,
    StartGame,
    RestartGame,
    NextRound,
    PlayCard,
    SetInvestigator,
    ForceGameState,
);
