use pineapple_engine::board::Street;
use pineapple_engine::cards::{Card, full_deck};
use pineapple_engine::chooser::{ChoiceRequest, MoveChooser};
use pineapple_engine::deck::Deck;
use pineapple_engine::fantasyland::FANTASYLAND_DEAL;
use pineapple_engine::game::{Game, GameConfig, MoveSource, Phase};
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

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| s.parse().unwrap()).collect()
}

/// Alice gets `alice`, Bob gets `bob`, followed by `rest` of the deck (the
/// remaining cards of the universe when `rest` is `None`).
fn deck(alice: &[&str], bob: &[&str], rest: Option<&[&str]>) -> Deck {
    let mut order = cards(alice);
    order.extend(cards(bob));
    match rest {
        Some(rest) => order.extend(cards(rest)),
        None => {
            let used = order.clone();
            order.extend(full_deck().into_iter().filter(|c| !used.contains(c)));
        }
    }
    Deck::from_cards(order).unwrap()
}

fn game() -> Game {
    Game::new(
        vec![Player::human("Alice"), Player::human("Bob")],
        Box::new(FirstLegal),
        GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        },
    )
    .unwrap()
}

/// Alice fills her front with the first three cards of her hand while Bob
/// puts his on the back street. Returns what Alice's third move applied.
fn fill_alice_front(game: &mut Game) -> Vec<pineapple_engine::game::MoveRecord> {
    let mut last = Vec::new();
    for _ in 0..3 {
        let card = game.players()[0].hand()[0];
        last = game.submit_move(0, card, Street::Front).unwrap();
        if game.is_over() {
            break;
        }
        let card = game.players()[1].hand()[0];
        game.submit_move(1, card, Street::Back).unwrap();
    }
    last
}

#[test]
fn queens_on_front_trigger_fantasyland() {
    let mut g = game();
    g.start_with_deck(deck(
        &["Qs", "Qd", "5c", "8h", "9h"],
        &["2c", "3c", "4d", "6s", "7s"],
        None,
    ))
    .unwrap();

    let applied = fill_alice_front(&mut g);
    assert!(g.is_over());
    assert_eq!(applied[0].source, MoveSource::Human);
    let fl: Vec<_> = applied[1..].to_vec();
    assert_eq!(fl.len(), 13);
    assert!(fl.iter().all(|m| m.source == MoveSource::Fantasyland && m.player == 0));

    let result = g.last_result().unwrap();
    let summary = result.fantasyland.as_ref().unwrap();
    assert_eq!(summary.player, 0);
    assert_eq!(summary.dealt, FANTASYLAND_DEAL);
    assert_eq!(summary.placed, 13);
    assert_eq!(summary.leftover.len(), summary.dealt - summary.placed);
    assert!(result.boards[0].is_complete());
    // Bob keeps the two cards he had placed
    assert_eq!(result.boards[1].len(), 2);
}

#[test]
fn fantasyland_board_is_built_from_the_new_deal() {
    let mut g = game();
    g.start_with_deck(deck(
        &["Kh", "Kd", "Ac", "8h", "9h"],
        &["2c", "3c", "4d", "6s", "7s"],
        None,
    ))
    .unwrap();
    fill_alice_front(&mut g);

    let result = g.last_result().unwrap();
    let old = cards(&["Kh", "Kd", "Ac", "8h", "9h"]);
    assert!(result.boards[0].cards().all(|c| !old.contains(c)));
}

#[test]
fn jacks_do_not_qualify() {
    let mut g = game();
    g.start_with_deck(deck(
        &["Js", "Jd", "Ac", "8h", "9h"],
        &["2c", "3c", "4d", "6s", "7s"],
        None,
    ))
    .unwrap();

    fill_alice_front(&mut g);
    assert!(!g.is_over());
    assert_eq!(g.phase(), Phase::Placing(Street::Front));
    assert_eq!(g.players()[0].board().street(Street::Front).len(), 3);
}

#[test]
fn disabled_fantasyland_never_triggers() {
    let mut g = Game::new(
        vec![Player::human("Alice"), Player::human("Bob")],
        Box::new(FirstLegal),
        GameConfig {
            seed: Some(1),
            fantasyland: false,
            ..GameConfig::default()
        },
    )
    .unwrap();
    g.start_with_deck(deck(
        &["As", "Ad", "Ac", "8h", "9h"],
        &["2c", "3c", "4d", "6s", "7s"],
        None,
    ))
    .unwrap();
    fill_alice_front(&mut g);
    assert!(!g.is_over());
}

#[test]
fn short_deck_deals_what_is_left() {
    let mut g = game();
    g.start_with_deck(deck(
        &["Qs", "Qd", "5c", "8h", "9h"],
        &["2c", "3c", "4d", "6s", "7s"],
        Some(&["Ts", "Td", "Tc", "Th", "Js"]),
    ))
    .unwrap();

    fill_alice_front(&mut g);
    assert!(g.is_over());
    let summary = g.last_result().unwrap().fantasyland.clone().unwrap();
    assert_eq!(summary.dealt, 5);
    assert_eq!(summary.placed, 5);
    assert!(summary.leftover.is_empty());
}
