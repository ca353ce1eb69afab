use std::cmp::Ordering;

use pineapple_engine::cards::Card;
use pineapple_engine::hand::{Category, compare_cards, compare_hands, evaluate_hand};

fn hand(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn category(s: &str) -> Category {
    evaluate_hand(&hand(s)).category
}

#[test]
fn detects_every_five_card_category() {
    assert_eq!(category("Ts Js Qs Ks As"), Category::StraightFlush);
    assert_eq!(category("Kc Kd Kh Ks 2c"), Category::FourOfAKind);
    assert_eq!(category("Kc Kd Kh 2s 2c"), Category::FullHouse);
    assert_eq!(category("2h 7h 9h Jh Ah"), Category::Flush);
    assert_eq!(category("9c Td Jh Qs Kc"), Category::Straight);
    assert_eq!(category("5c 5d 5h Ks 2c"), Category::ThreeOfAKind);
    assert_eq!(category("5c 5d 9h 9s 2c"), Category::TwoPair);
    assert_eq!(category("5c 5d 9h Ts 2c"), Category::OnePair);
    assert_eq!(category("5c 7d 9h Ts 2c"), Category::HighCard);
}

#[test]
fn three_card_streets() {
    assert_eq!(category("Qc Qd Qh"), Category::ThreeOfAKind);
    assert_eq!(category("Qc Qd 2h"), Category::OnePair);
    assert_eq!(category("Qc 9d 2h"), Category::HighCard);
    assert_eq!(category("2c 7c Jc"), Category::Flush);
    assert_eq!(category("Qc Kd Ah"), Category::Straight);
    assert_eq!(category("4s 5s 6s"), Category::StraightFlush);
}

#[test]
fn category_ordering_is_correct() {
    let ordered = [
        "5c 7d 9h Ts 2c",
        "5c 5d 9h Ts 2c",
        "5c 5d 9h 9s 2c",
        "5c 5d 5h Ks 2c",
        "9c Td Jh Qs Kc",
        "2h 7h 9h Jh Ah",
        "Kc Kd Kh 2s 2c",
        "Kc Kd Kh Ks 2c",
        "Ts Js Qs Ks As",
    ];
    for pair in ordered.windows(2) {
        assert_eq!(
            compare_cards(&hand(pair[1]), &hand(pair[0])),
            Ordering::Greater,
            "{} should beat {}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn quad_kings_beat_a_flush() {
    assert!(compare_cards(&hand("Kc Kd Kh Ks 3d"), &hand("2h 7h 9h Jh Ah")).is_gt());
}

#[test]
fn kickers_break_ties_all_the_way_down() {
    let a = evaluate_hand(&hand("Ac Kd 9h 7s 3c"));
    let b = evaluate_hand(&hand("Ad Kh 9c 7d 2c"));
    assert_eq!(compare_hands(&a, &b), Ordering::Greater);

    let pair_high_kicker = evaluate_hand(&hand("8c 8d Ah 4s 3c"));
    let pair_low_kicker = evaluate_hand(&hand("8h 8s Kh Qs Jc"));
    assert_eq!(compare_hands(&pair_high_kicker, &pair_low_kicker), Ordering::Greater);

    let full_a = evaluate_hand(&hand("3c 3d 3h As Ac"));
    let full_b = evaluate_hand(&hand("2c 2d 2h Ks Kc"));
    assert_eq!(compare_hands(&full_a, &full_b), Ordering::Greater);
}

#[test]
fn identical_ranks_tie_regardless_of_suit() {
    assert_eq!(
        compare_cards(&hand("Ac Kd 9h 7s 3c"), &hand("As Kh 9c 7d 3d")),
        Ordering::Equal
    );
}

#[test]
fn comparison_is_transitive_and_antisymmetric() {
    let hands: Vec<_> = [
        "Qc Qd 2h",
        "Ac Kd 3h",
        "Qc Kd Ah",
        "2c 7c Jc",
        "Kc Kd Kh",
        "5c 5d 9h 9s 2c",
        "",
    ]
    .iter()
    .map(|s| evaluate_hand(&hand(s)))
    .collect();
    for a in &hands {
        for b in &hands {
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            for c in &hands {
                if compare_hands(a, b).is_gt() && compare_hands(b, c).is_gt() {
                    assert!(compare_hands(a, c).is_gt());
                }
            }
        }
    }
}

#[test]
fn category_order_holds_on_three_card_streets() {
    assert!(compare_cards(&hand("4s 5s 6s"), &hand("Ac Ad Ah")).is_gt());
    assert!(compare_cards(&hand("Ac Ad Ah"), &hand("Qc Kd Ah")).is_lt());
}
