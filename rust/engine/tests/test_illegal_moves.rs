use pineapple_engine::board::Street;
use pineapple_engine::cards::{Card, full_deck};
use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
use pineapple_engine::deck::Deck;
use pineapple_engine::errors::GameError;
use pineapple_engine::game::{Game, GameConfig, Phase};
use pineapple_engine::player::Player;
use pineapple_engine::rules::Move;

struct FirstLegal;

impl MoveChooser for FirstLegal {
    fn choose_move(&mut self, request: &ChoiceRequest<'_>) -> Move {
        request.legal_moves[0]
    }
    fn name(&self) -> &str {
        "FirstLegal"
    }
}

/// Always answers with a card nobody holds.
struct Cheater(Card);

impl MoveChooser for Cheater {
    fn choose_move(&mut self, _request: &ChoiceRequest<'_>) -> Move {
        Move::new(self.0, Street::Front)
    }
    fn name(&self) -> &str {
        "Cheater"
    }
}

fn started(players: Vec<Player>, chooser: Box<dyn MoveChooser>) -> Game {
    let mut game = Game::new(
        players,
        chooser,
        GameConfig {
            seed: Some(8),
            ..GameConfig::default()
        },
    )
    .unwrap();
    game.start().unwrap();
    game
}

fn missing_card(game: &Game) -> Card {
    game.deck().cards()[0]
}

#[test]
fn card_not_in_hand_changes_nothing_and_repeats() {
    let mut game = started(
        vec![Player::human("A"), Player::human("B")],
        Box::new(FirstLegal),
    );
    let before = game.snapshot();
    let card = missing_card(&game);

    let first = game.submit_move(0, card, Street::Front).unwrap_err();
    let second = game.submit_move(0, card, Street::Front).unwrap_err();
    assert_eq!(first, GameError::CardNotInHand { player: 0, card });
    assert_eq!(first, second);
    assert_eq!(game.snapshot(), before);
    assert!(game.moves().is_empty());
}

#[test]
fn full_street_changes_nothing() {
    let mut game = started(
        vec![Player::human("A"), Player::human("B")],
        Box::new(FirstLegal),
    );
    // Unshuffled: Alice holds 2c-6c, Bob 7c-Jc.
    game.start_with_deck(Deck::from_cards(full_deck()).unwrap()).unwrap();
    for _ in 0..3 {
        let card = game.players()[0].hand()[0];
        game.submit_move(0, card, Street::Front).unwrap();
        let card = game.players()[1].hand()[0];
        game.submit_move(1, card, Street::Middle).unwrap();
    }
    let before = game.snapshot();
    let card = game.players()[0].hand()[0];
    let err = game.submit_move(0, card, Street::Front).unwrap_err();
    assert_eq!(
        err,
        GameError::StreetFull {
            street: Street::Front
        }
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn unknown_street_names_are_rejected_by_parsing() {
    let err = "river".parse::<Street>().unwrap_err();
    assert_eq!(err, GameError::UnknownStreet("river".to_string()));
    assert_eq!("Top".parse::<Street>(), Ok(Street::Front));
}

#[test]
fn illegal_chooser_move_aborts_the_hand() {
    let twin = started(
        vec![Player::human("A"), Player::automated("Bot")],
        Box::new(FirstLegal),
    );
    let ghost = *twin.deck().cards().last().unwrap();
    let card = twin.players()[0].hand()[0];

    let mut game = started(
        vec![Player::human("A"), Player::automated("Bot")],
        Box::new(Cheater(ghost)),
    );
    let err = game.submit_move(0, card, Street::Back).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalChooserMove {
            player: 1,
            card: ghost,
            street: Street::Front
        }
    );
    assert!(err.is_fatal());
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.players().iter().all(|p| p.hand().is_empty() && p.board().is_empty()));
    assert!(game.players().iter().all(|p| p.score() == 0));
    assert!(game.last_result().is_none());
    let snap = game.snapshot();
    assert_eq!(snap.phase, "not_started");
    assert!(!snap.game_over);
    assert_eq!(snap.winner, None);

    assert_eq!(
        game.submit_move(0, card, Street::Back),
        Err(GameError::NoGameInProgress)
    );
    // A fresh start recovers.
    game.set_chooser(Box::new(FirstLegal));
    game.start().unwrap();
    assert_eq!(game.phase(), Phase::Placing(Street::Front));
}

#[test]
fn illegal_first_automated_move_fails_start() {
    let mut game = Game::new(
        vec![Player::automated("Bot"), Player::human("B")],
        Box::new(Cheater("As".parse().unwrap())),
        GameConfig {
            seed: Some(8),
            ..GameConfig::default()
        },
    )
    .unwrap();
    let err = game
        .start_with_deck(Deck::from_cards(full_deck()).unwrap())
        .unwrap_err();
    assert!(matches!(err, GameError::IllegalChooserMove { player: 0, .. }));
    assert_eq!(game.phase(), Phase::NotStarted);
}

#[test]
fn scripted_deck_with_repeated_cards_never_reaches_the_table() {
    let ace: Card = "As".parse().unwrap();
    let mut cards = vec![ace; 10];
    cards.extend(full_deck());
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        GameError::DuplicateCard(ace)
    );

    // a valid scripted deal still partitions the 52 cards
    let mut game = started(
        vec![Player::human("A"), Player::human("B")],
        Box::new(FirstLegal),
    );
    game.start_with_deck(Deck::from_cards(full_deck()).unwrap())
        .unwrap();
    let mut seen: Vec<Card> = game.deck().cards().to_vec();
    for p in game.players() {
        seen.extend_from_slice(p.hand());
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 52);
}
