//! Command handler modules for the Pineapple CLI.
//!
//! Each subcommand lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for `play`,
//!   the input stream are passed in
//! - Resolved [`Config`](crate::config::Config) passed by reference; flags
//!   given on the command line win over it
//!
//! # Example
//!
//! ```rust,ignore
//! use pineapple_cli::commands::handle_deal_command;
//! use std::io;
//!
//! let config = Default::default();
//! handle_deal_command(Some(42), None, &config, &mut io::stdout(), &mut io::stderr())?;
//! ```

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
