use std::{env, env::VarError};

/// Returns true when the caller passed arguments. `monthly_report` is configured entirely from the environment, so
/// any argument is taken as a request for help: the usage text and the non-secret report settings are printed, and
/// `main` exits without fetching orders or sending mail.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // Be explicit about which envars to print, so as to avoid accidentally exposing secrets
    const DISPLAY_ENVS: [&str; 7] = [
        "RUST_LOG",
        "SHOPIFY_STORE_DOMAIN",
        "SHOPIFY_API_VERSION",
        "EMAIL_TO",
        "EMAIL_FROM",
        "REPORT_TITLE",
        "REPORT_DRY_RUN",
    ];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
