use std::env;

use log::*;

/// Parse a boolean flag from a string value, or return the given default value otherwise.
pub fn parse_boolean_flag(value: Option<String>, default: bool) -> bool {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("🪛️ '{value}' is not a recognised boolean value. Using {default} instead.");
            default
        },
    }
}

/// Reads a boolean flag from the environment variable `name`.
pub fn env_flag(name: &str, default: bool) -> bool {
    parse_boolean_flag(env::var(name).ok(), default)
}

/// Reads `name` from the environment. If it is missing (or not valid unicode), a warning is logged and `default` is
/// returned. Missing values are not fatal here; they surface later as failed requests.
pub fn env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|e| {
        warn!("🪛️ {name} is not available ({e}). Using '{default}' instead.");
        default.to_string()
    })
}
