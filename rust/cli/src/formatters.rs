//! Card, board, and result formatters for terminal display.
//!
//! Cards are shown in the same short notation `play` accepts as input
//! (`Qc`, `Th`), so what you see is what you type.
//!
//! ## Example
//!
//! ```rust
//! use pineapple_engine::board::{Board, Street};
//! use pineapple_cli::formatters::{format_board, format_cards};
//!
//! let ace = "As".parse().unwrap();
//! assert_eq!(format_cards(&[ace]), "[As]");
//!
//! let mut board = Board::new();
//! board.place(Street::Front, ace).unwrap();
//! assert!(format_board(&board).starts_with("front  : As __ __"));
//! ```

use pineapple_engine::board::{Board, Street};
use pineapple_engine::cards::Card;
use pineapple_engine::game::{GameResult, MoveRecord};
use pineapple_engine::hand::evaluate_hand;

/// Format a list of cards as `[Qc Ks 2d]`.
pub fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

/// One line per street, empty slots shown as `__`, with the street's
/// current category once it holds cards.
pub fn format_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(Street::ALL.len());
    for street in Street::ALL {
        let cards = board.street(street);
        let mut slots: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
        slots.resize(street.capacity(), "__".to_string());
        let mut line = format!("{:<7}: {}", street.name(), slots.join(" "));
        if !cards.is_empty() {
            line.push_str(&format!("  ({})", evaluate_hand(cards).category));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// `Alice: Qc -> front`
pub fn format_move(record: &MoveRecord, names: &[String]) -> String {
    let who = names
        .get(record.player)
        .map(String::as_str)
        .unwrap_or("?");
    format!("{}: {} -> {}", who, record.card, record.street)
}

/// Human-readable summary of a finished game.
pub fn format_result(result: &GameResult, names: &[String]) -> Vec<String> {
    let name = |i: usize| names.get(i).map(String::as_str).unwrap_or("?");
    let mut lines = Vec::new();

    for pairing in &result.pairings {
        let streets: Vec<String> = pairing
            .streets
            .iter()
            .map(|s| {
                let winner = match s.winner {
                    Some(w) => name(w).to_string(),
                    None => "tie".to_string(),
                };
                format!("{} {}", s.street, winner)
            })
            .collect();
        let mut line = format!(
            "{} vs {}: {} ({}-{})",
            name(pairing.first),
            name(pairing.second),
            streets.join(", "),
            pairing.first_points,
            pairing.second_points
        );
        if let Some(s) = pairing.scoop {
            line.push_str(&format!(" scoop by {}", name(s)));
        }
        lines.push(line);
    }

    if let Some(fl) = &result.fantasyland {
        lines.push(format!(
            "Fantasyland: {} dealt {}, placed {}, leftover {}",
            name(fl.player),
            fl.dealt,
            fl.placed,
            format_cards(&fl.leftover)
        ));
    }

    let scores: Vec<String> = result
        .scores
        .iter()
        .zip(&result.points)
        .enumerate()
        .map(|(i, (total, pts))| format!("{} {:+} (total {})", name(i), pts, total))
        .collect();
    lines.push(format!("Points: {}", scores.join(", ")));
    lines.push(format!(
        "Leader: {}",
        result.winner_name.as_deref().unwrap_or("-")
    ));
    lines
}
