//! CLI command implementations.

mod common;
mod pull;
mod push;
mod validate;

pub use common::ConfigArgs;
pub use pull::{PullArgs, run_pull};
pub use push::{PushArgs, run_push};
pub use validate::{ValidateArgs, run_validate};
