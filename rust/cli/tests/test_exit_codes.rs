//! Exit codes and stream routing of `run`.
//!
//! - Successful commands return 0 and write nothing to stderr
//! - Bad arguments, bad values and unknown choosers return 2
//! - Errors are written to stderr, never stdout

use serial_test::serial;

fn clear_env() {
    for key in [
        "PINEAPPLE_CONFIG",
        "PINEAPPLE_SEED",
        "PINEAPPLE_CHOOSER",
        "PINEAPPLE_THINK_MS",
        "PINEAPPLE_FANTASYLAND",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = pineapple_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn deal_success_returns_zero() {
    clear_env();
    let (code, out, err) = run(&["pineapple", "deal", "--seed", "42", "--players", "3"]);
    assert_eq!(code, 0);
    assert!(out.contains("P3: ["));
    assert!(out.contains("Deck remaining: 37"));
    assert!(err.is_empty(), "unexpected stderr: {}", err);
}

#[test]
#[serial]
fn sim_success_returns_zero() {
    clear_env();
    let (code, out, _) = run(&["pineapple", "sim", "--games", "2", "--seed", "9"]);
    assert_eq!(code, 0);
    assert!(out.contains("Game 2: points"));
}

#[test]
#[serial]
fn eval_success_returns_zero() {
    clear_env();
    let (code, out, _) = run(&[
        "pineapple", "eval", "--a", "baseline", "--b", "random", "--games", "2", "--seed", "1",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Wins: A "));
}

#[test]
#[serial]
fn zero_games_returns_two() {
    clear_env();
    let (code, out, err) = run(&["pineapple", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("games must be >= 1"));
}

#[test]
#[serial]
fn table_size_out_of_range_returns_two() {
    clear_env();
    let (code, _, err) = run(&["pineapple", "deal", "--players", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("players must be between 2 and 4"));
}

#[test]
#[serial]
fn unknown_chooser_returns_two_and_lists_known_ones() {
    clear_env();
    let (code, out, err) = run(&["pineapple", "sim", "--games", "1", "--chooser", "oracle"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("oracle"));
    assert!(err.contains("baseline, random"));
}

#[test]
#[serial]
fn missing_required_argument_returns_two() {
    clear_env();
    let (code, out, err) = run(&["pineapple", "eval", "--a", "baseline"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Commands:"));
}

#[test]
#[serial]
fn version_returns_zero() {
    let (code, out, _) = run(&["pineapple", "--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("pineapple"));
}
