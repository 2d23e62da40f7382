pub mod helpers;
mod secret;

pub use helpers::{env_flag, env_or_default, parse_boolean_flag};
pub use secret::Secret;
