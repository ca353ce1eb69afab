//! Input parsing and validation for interactive commands.
//!
//! Validation functions return structured `Result` types or custom enums
//! (like `ParseResult`) to provide clear error messages to users.

use pineapple_engine::board::Street;
use pineapple_engine::cards::Card;
use pineapple_engine::game::{MAX_PLAYERS, MIN_PLAYERS};

/// Result type for parsing a line typed during `play`.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A card and the street to put it on
    Placement(Card, Street),
    /// User entered quit command (q or quit)
    Quit,
    /// User asked for the input format
    Help,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a placement or a special command.
///
/// Accepts `<card> <street>` where the card is short notation (`Qc`, `10h`,
/// `Th`) and the street is `front`/`f`, `middle`/`m` or `back`/`b`.
/// `q`/`quit` and `?`/`help` are recognised on their own.
///
/// # Example
///
/// ```rust
/// # use pineapple_cli::validation::{parse_placement, ParseResult};
/// use pineapple_engine::board::Street;
///
/// assert_eq!(
///     parse_placement("Qc front"),
///     ParseResult::Placement("Qc".parse().unwrap(), Street::Front)
/// );
/// assert_eq!(parse_placement("q"), ParseResult::Quit);
///
/// match parse_placement("Qc river") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("river")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_placement(input: &str) -> ParseResult {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match first.to_ascii_lowercase().as_str() {
        "q" | "quit" => return ParseResult::Quit,
        "?" | "help" => return ParseResult::Help,
        _ => {}
    }

    if parts.len() != 2 {
        return ParseResult::Invalid(
            "Enter a card and a street (e.g., 'Qc front'), or q to quit".to_string(),
        );
    }

    let card: Card = match parts[0].parse() {
        Ok(c) => c,
        Err(e) => return ParseResult::Invalid(e.to_string()),
    };
    match parts[1].parse::<Street>() {
        Ok(street) => ParseResult::Placement(card, street),
        Err(e) => ParseResult::Invalid(format!("{}. Valid streets: front, middle, back", e)),
    }
}

/// Validate a game count given on the command line.
pub fn validate_games(games: u32) -> Result<(), String> {
    if games == 0 {
        return Err("games must be >= 1".to_string());
    }
    Ok(())
}

/// Validate a table size given on the command line.
pub fn validate_players(players: usize) -> Result<(), String> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        return Err(format!(
            "players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        ));
    }
    Ok(())
}
