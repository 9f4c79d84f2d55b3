use log::LevelFilter;
use std::str::FromStr;

pub const ASSUME_ROLE_MODE: &str = "ASSUME_ROLE_MODE";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Start-up settings of the Lambda function, read from its environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Report through the rule's execution role instead of the function's own
    /// credentials.
    pub assume_role_mode: bool,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            assume_role_mode: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Settings {
            assume_role_mode: lookup(ASSUME_ROLE_MODE)
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.assume_role_mode),
            log_level: lookup(LOG_LEVEL)
                .and_then(|value| LevelFilter::from_str(value.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
