//! One module per subcommand. Each exposes an `execute` function.

pub mod attach;
pub mod check;
pub mod completions;
pub mod config_check;
pub mod find;
pub mod gen_secret;
pub mod slug;
pub mod token;
pub mod verify;
