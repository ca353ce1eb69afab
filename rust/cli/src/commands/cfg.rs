//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "chooser": {
//!     "value": "baseline",
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(
    resolved: &ConfigResolved,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "chooser": {
            "value": config.chooser,
            "source": sources.chooser,
        },
        "think_time_ms": {
            "value": config.think_time_ms,
            "source": sources.think_time_ms,
        },
        "fantasyland": {
            "value": config.fantasyland,
            "source": sources.fantasyland,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
