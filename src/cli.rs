//! Command-line options.
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "users-ui",
    version,
    about = "Create and list users through a REST API"
)]
pub struct Cli {
    /// Base URL of the users API (`/users` is appended).
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Theme file; created with the default palette if missing.
    #[arg(long, default_value = "theme.conf")]
    pub theme: PathBuf,

    /// Write logs to this file. Nothing is logged when unset.
    #[arg(long, env = "USERS_UI_LOG")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::parse_from([
            "users-ui",
            "--api-url",
            "http://api.test:8080/",
            "--theme",
            "/tmp/t.conf",
            "--log-file",
            "/tmp/u.log",
        ]);
        assert_eq!(cli.api_url, "http://api.test:8080/");
        assert_eq!(cli.theme, PathBuf::from("/tmp/t.conf"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/u.log")));
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
