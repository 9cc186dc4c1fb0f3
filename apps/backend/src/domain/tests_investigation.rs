//! Turn engine tests: preconditions, per-card effects, round and game end.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::actions::{Action, PlayCard};
use crate::domain::fixtures::{make_game, CardFixtures, GameBuilder};
use crate::domain::investigation::{on_play_card, play_card};
use crate::domain::{Card, Game, GameState, Role, Secret};
use crate::errors::domain::{DomainError, ErrorCategory, NotFoundKind, ValidationKind};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// The current investigator picks `card_number` from `target`.
fn pick(game: &mut Game, target: &str, card_number: usize) {
    let action = PlayCard {
        game_id: game.id.clone(),
        source_player: game.current_investigator_id.clone().unwrap(),
        target_player: target.into(),
        card_number,
    };
    play_card(game, &action, &mut rng()).unwrap();
}

fn try_play(
    game: &Game,
    source: &str,
    target: &str,
    card_number: usize,
) -> Result<Game, DomainError> {
    on_play_card(
        Some(game.clone()),
        &PlayCard {
            game_id: game.id.clone(),
            source_player: source.into(),
            target_player: target.into(),
            card_number,
        },
        &mut rng(),
    )
}

fn cards(letters: &str) -> Vec<Card> {
    CardFixtures::parse_hardcoded(letters)
}

mod preconditions {
    use super::*;

    fn game() -> Game {
        make_game("g", 1, &[("p0", "CSRRR"), ("p1", "RRRRR")], "")
    }

    #[test]
    fn missing_game_is_not_found() {
        let err = on_play_card(
            None,
            &PlayCard {
                game_id: "g".into(),
                source_player: "p0".into(),
                target_player: "p1".into(),
                card_number: 1,
            },
            &mut rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
    }

    #[test]
    fn game_must_be_in_progress() {
        for state in [
            GameState::NotStarted,
            GameState::Paused,
            GameState::InvestigatorsWon,
            GameState::CultistsWon,
        ] {
            let mut g = game();
            g.state = state;
            let err = try_play(&g, "p0", "p1", 1).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InvalidState, "{state}");
        }
    }

    #[test]
    fn target_must_exist() {
        let err = try_play(&game(), "p0", "ghost", 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound(NotFoundKind::Player, _)
        ));
    }

    #[test]
    fn card_number_is_one_based_and_bounded() {
        for n in [0, 6] {
            let err = try_play(&game(), "p0", "p1", n).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::CardNumberOutOfRange, _)
            ));
        }
        assert!(try_play(&game(), "p0", "p1", 5).is_ok());
    }

    #[test]
    fn only_current_investigator_may_act() {
        let err = try_play(&game(), "p1", "p0", 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::OutOfTurn, _)
        ));
        assert_eq!(err.category(), ErrorCategory::TurnViolation);
    }

    #[test]
    fn investigator_must_be_seated() {
        let mut g = make_game("g", 1, &[("p0", "IRRRR"), ("p1", "IRRRR")], "");
        g.current_investigator_id = Some("ghost".into());

        let err = try_play(&g, "ghost", "p1", 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound(NotFoundKind::Player, _)
        ));
    }

    #[test]
    fn no_self_investigation() {
        let err = try_play(&game(), "p0", "p0", 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::SelfInvestigation, _)
        ));
    }

    #[test]
    fn failure_leaves_game_untouched() {
        let mut g = game();
        let before = g.clone();
        let action = PlayCard {
            game_id: "g".into(),
            source_player: "p1".into(),
            target_player: "p0".into(),
            card_number: 1,
        };
        assert!(play_card(&mut g, &action, &mut rng()).is_err());
        assert_eq!(g, before);
    }
}

mod rock {
    use super::*;

    #[test]
    fn initial_rock_pick() {
        let mut game = make_game(
            "",
            1,
            &[
                ("p0", "CSRRR"),
                ("p1", "RRRRR"),
                ("p2", "SSSRR"),
                ("p3", "RRRRR"),
            ],
            "",
        );
        pick(&mut game, "p1", 1);

        assert_eq!(game.visible_cards, vec![Card::FutileInvestigation]);
        assert_eq!(game.player_list[1].hand, cards("RRRR"));
        assert_eq!(game.current_investigator_id.as_deref(), Some("p1"));
        assert_eq!(game.state, GameState::InProgress);
        assert!(matches!(game.history.last(), Some(Action::PlayCard(_))));
    }

    #[test]
    fn insanitys_grasp_behaves_like_a_rock() {
        let mut game = make_game("", 1, &[("p0", "RR"), ("p1", "GR"), ("p2", "RR")], "");
        pick(&mut game, "p1", 1);
        assert_eq!(game.visible_cards, vec![Card::InsanitysGrasp]);
        assert_eq!(game.state, GameState::InProgress);
        assert_eq!(game.current_investigator_id.as_deref(), Some("p1"));
    }

    #[test]
    fn removes_only_the_picked_slot() {
        let mut game = make_game("", 1, &[("p0", "RR"), ("p1", "SRCR"), ("p2", "RR")], "");
        pick(&mut game, "p1", 2);
        assert_eq!(game.player_list[1].hand, cards("SCR"));
    }
}

mod elder_sign {
    use super::*;

    #[test]
    fn initial_elder_sign_pick() {
        let mut game = make_game(
            "",
            1,
            &[
                ("p0", "CRRRR"),
                ("p1", "RRRRR"),
                ("p2", "SSSSR"),
                ("p3", "RRRRR"),
            ],
            "",
        );
        pick(&mut game, "p2", 1);
        assert_eq!(game.visible_cards, vec![Card::ElderSign]);
        assert_eq!(game.player_list[2].hand, cards("SSSR"));
        assert_eq!(game.current_investigator_id.as_deref(), Some("p2"));
        assert_eq!(game.state, GameState::InProgress);
    }

    #[test]
    fn final_elder_sign_wins_for_investigators() {
        let mut game = make_game(
            "",
            1,
            &[
                ("p0", "CRRRR"),
                ("p1", "RRRRR"),
                ("p2", "RS"),
                ("p3", "RRRRR"),
            ],
            "SSS",
        );
        pick(&mut game, "p2", 2);
        assert_eq!(game.visible_cards, cards("SSSS"));
        assert_eq!(game.player_list[2].hand, cards("R"));
        assert_eq!(game.current_investigator_id.as_deref(), Some("p2"));
        assert_eq!(game.state, GameState::InvestigatorsWon);
    }

    #[test]
    fn win_check_runs_before_round_end() {
        let mut game = make_game(
            "thread",
            1,
            &[
                ("p1", "SSRRR"),
                ("p2", "RRRRR"),
                ("p3", "SSRRR"),
                ("p4", "RRRRC"),
            ],
            "",
        );
        pick(&mut game, "p3", 1);
        pick(&mut game, "p1", 1);
        pick(&mut game, "p3", 1);
        pick(&mut game, "p1", 1);

        assert_eq!(game.state, GameState::InvestigatorsWon);
        assert_eq!(game.round, 1);
    }
}

mod cthulhu {
    use super::*;

    #[test]
    fn only_cthulhu_ends_the_game() {
        let mut game = make_game("", 1, &[("p2", "RRRR"), ("p1", "CRRR")], "");
        pick(&mut game, "p1", 1);
        assert_eq!(game.state, GameState::CultistsWon);
        assert_eq!(game.visible_cards, vec![Card::Cthulhu]);
        assert_eq!(game.current_investigator_id.as_deref(), Some("p1"));
    }

    #[test]
    fn game_continues_while_cthulhus_remain() {
        let mut game = make_game("", 1, &[("p2", "RRRR"), ("p1", "CCRR")], "");
        pick(&mut game, "p1", 1);
        assert_eq!(game.state, GameState::InProgress);
    }

    #[test]
    fn remaining_cthulhu_in_another_hand_keeps_game_going() {
        let mut game = make_game("", 1, &[("p0", "CR"), ("p1", "CR"), ("p2", "RR")], "");
        pick(&mut game, "p1", 1);
        assert_eq!(game.state, GameState::InProgress);
    }

    #[test]
    fn last_cthulhu_ends_the_game() {
        let mut game = make_game("", 1, &[("p2", "RRRR"), ("p1", "CCRR")], "");
        game.paranoid_player_id = Some("p2".into());
        pick(&mut game, "p1", 1);
        pick(&mut game, "p1", 1);
        assert_eq!(game.state, GameState::CultistsWon);
    }
}

mod mirage {
    use super::*;

    #[test]
    fn appends_mirage_if_there_are_no_lights() {
        let mut game = make_game("", 1, &[("p2", "RRRR"), ("p1", "MRRR")], "R");
        pick(&mut game, "p1", 1);
        assert_eq!(game.visible_cards, cards("RM"));
        assert_eq!(game.state, GameState::InProgress);
    }

    #[test]
    fn ends_the_game_on_the_last_round() {
        let mut game = make_game("", 4, &[("p2", "RR"), ("p1", "MR")], "RRRRRR");
        pick(&mut game, "p1", 1);
        assert_eq!(game.state, GameState::CultistsWon);
    }

    #[test]
    fn replaces_the_latest_light_without_ending_the_round() {
        let mut game = make_game("", 3, &[("p2", "RRRR"), ("p1", "MRRR")], "SRSR");
        pick(&mut game, "p1", 1);
        assert_eq!(game.visible_cards, cards("SRMR"));
        assert_eq!(game.discards, vec![Card::ElderSign]);
        assert_eq!(game.round, 3);
        assert_eq!(game.state, GameState::InProgress);
        assert_eq!(game.current_investigator_id.as_deref(), Some("p1"));
    }
}

mod evil_presence {
    use super::*;

    #[test]
    fn junks_the_players_hand() {
        let mut game = make_game("", 1, &[("p1", "RR"), ("p2", "ER")], "");
        pick(&mut game, "p2", 1);
        assert_eq!(game.visible_cards, vec![Card::EvilPresence]);
        assert!(game.player_list[1].hand.is_empty());
        assert_eq!(game.discards, vec![Card::FutileInvestigation]);
    }

    #[test]
    fn discards_return_at_the_next_round() {
        let mut game = make_game("", 1, &[("p1", "ER"), ("p2", "RR")], "");
        pick(&mut game, "p2", 1);
        pick(&mut game, "p1", 1);
        assert_eq!(game.visible_cards, cards("RE"));
        assert_eq!(game.round, 2);
        assert!(game.discards.is_empty());
        assert_eq!(game.cards_in_hands(), 2);
    }
}

mod paranoia {
    use super::*;

    #[test]
    fn keeps_the_flashlight_until_the_end_of_round() {
        let mut game = make_game(
            "",
            1,
            &[
                ("p1", "RRRRR"),
                ("p2", "PRRRR"),
                ("p3", "RRRRR"),
                ("p4", "RRRRR"),
            ],
            "",
        );
        pick(&mut game, "p2", 1);
        assert_eq!(game.paranoid_player_id.as_deref(), Some("p2"));
        assert_eq!(game.current_investigator_id.as_deref(), Some("p2"));

        pick(&mut game, "p1", 1);
        assert_eq!(game.paranoid_player_id.as_deref(), Some("p2"));
        assert_eq!(game.current_investigator_id.as_deref(), Some("p2"));

        pick(&mut game, "p1", 1);
        assert_eq!(game.paranoid_player_id.as_deref(), Some("p2"));
        assert_eq!(game.current_investigator_id.as_deref(), Some("p2"));

        pick(&mut game, "p1", 1);
        assert_eq!(game.paranoid_player_id, None);
        assert_eq!(game.current_investigator_id.as_deref(), Some("p1"));
        assert_eq!(game.visible_cards, cards("PRRR"));
        assert_eq!(game.round, 2);
    }

    #[test]
    fn paranoia_on_the_last_pick_of_a_round_is_cleared() {
        let mut game = make_game("", 1, &[("p1", "RR"), ("p2", "PR")], "R");
        pick(&mut game, "p2", 1);
        assert_eq!(game.round, 2);
        assert_eq!(game.paranoid_player_id, None);
        assert_eq!(game.current_investigator_id.as_deref(), Some("p2"));
    }
}

mod private_eye {
    use super::*;

    #[test]
    fn reveals_the_targets_role_to_the_investigator() {
        let mut game = GameBuilder::new("")
            .player("p1", Role::Cultist, "RRRRR")
            .player("p2", Role::Investigator, "IRRRR")
            .investigator("p1")
            .build();
        pick(&mut game, "p2", 1);
        assert_eq!(
            game.player_list[0].secrets,
            vec![Secret::Role {
                player: "p2".into(),
                role: Role::Investigator,
            }]
        );
        assert!(game.player_list[1].secrets.is_empty());
        assert_eq!(game.visible_cards, vec![Card::PrivateEye]);
    }
}

mod rounds {
    use super::*;

    #[test]
    fn moves_to_the_next_round_after_the_last_pick() {
        let mut game = make_game(
            "",
            1,
            &[
                ("p0", "RRRRC"),
                ("p1", "RRRRR"),
                ("p2", "SSSSR"),
                ("p3", "RRRRR"),
            ],
            "",
        );
        pick(&mut game, "p1", 1);
        pick(&mut game, "p2", 1);
        pick(&mut game, "p3", 1);
        pick(&mut game, "p0", 1);

        assert_eq!(game.visible_cards, cards("RSRR"));
        for player in &game.player_list {
            assert_eq!(player.hand.len(), 4);
        }
        assert_eq!(game.current_investigator_id.as_deref(), Some("p0"));
        assert_eq!(game.state, GameState::InProgress);
        assert_eq!(game.round, 2);
    }

    #[test]
    fn finishing_the_fourth_round_loses_for_investigators() {
        let mut game = make_game(
            "",
            4,
            &[("p0", "RC"), ("p1", "RR"), ("p2", "RS"), ("p3", "RR")],
            "SSSRRRRRRRRR",
        );
        pick(&mut game, "p1", 1);
        pick(&mut game, "p2", 1);
        pick(&mut game, "p3", 1);
        pick(&mut game, "p0", 1);

        assert_eq!(game.state, GameState::CultistsWon);
        assert_eq!(game.round, 4);
    }

    #[test]
    fn result_reports_round_end() {
        let mut game = make_game("", 1, &[("p0", "RR"), ("p1", "RR")], "R");
        let result = play_card(
            &mut game,
            &PlayCard {
                game_id: "".into(),
                source_player: "p0".into(),
                target_player: "p1".into(),
                card_number: 1,
            },
            &mut rng(),
        )
        .unwrap();
        assert_eq!(result.card, Card::FutileInvestigation);
        assert!(result.round_ended);
    }
}
