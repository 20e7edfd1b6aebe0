//! Environment variable configuration
//!
//! Every variable is a type implementing [`EnvVar`]: its name, default,
//! description and a validating parser live together.

use std::env;

use url::Url;

use crate::core::{MicrodataError, MicrodataResult};

/// Accessor for one typed environment variable
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> MicrodataResult<T>;

    fn get() -> MicrodataResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => match Self::DEFAULT {
                Some(default) => Ok(default),
                None => Err(config_error(
                    Self::NAME,
                    "Required environment variable not set".to_string(),
                )),
            },
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// Core variables
pub mod core {
    use super::*;

    /// Maximum level of emitted log events
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "MICRODATA_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> MicrodataResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }

        fn parse(value: &str) -> MicrodataResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(config_error(
                    Self::NAME,
                    format!("Invalid log level '{value}'. Use: trace, debug, info, warn, error"),
                )),
            }
        }
    }

    /// Disable colored output
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> MicrodataResult<bool> {
            // NO_COLOR convention: any non-empty value disables color
            Ok(!value.is_empty())
        }
    }

    /// Default document base URL
    pub struct BaseUrl;
    impl EnvVar<Option<String>> for BaseUrl {
        const NAME: &'static str = "MICRODATA_BASE_URL";
        const DEFAULT: Option<Option<String>> = Some(None);
        const DESCRIPTION: &'static str =
            "Base URL used to resolve relative URL properties when none is given";

        fn parse(value: &str) -> MicrodataResult<Option<String>> {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }

            Url::parse(value).map_err(|e| {
                config_error(Self::NAME, format!("Invalid absolute URL '{value}': {e}"))
            })?;

            Ok(Some(value.to_string()))
        }
    }
}

fn config_error(variable: &str, message: String) -> MicrodataError {
    MicrodataError::Config {
        variable: variable.to_string(),
        message,
    }
}

/// Snapshot of all configuration variables
///
/// Fails on the first variable that is set but invalid.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub base_url: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> MicrodataResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            no_color: core::NoColor::get()?,
            base_url: core::BaseUrl::get()?,
        })
    }
}

/// Renders markdown documentation for all supported variables
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: \"warn\")\n",
        core::LogLevel::NAME,
        core::LogLevel::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        core::NoColor::NAME,
        core::NoColor::DESCRIPTION,
        core::NoColor::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: none)\n",
        core::BaseUrl::NAME,
        core::BaseUrl::DESCRIPTION
    ));

    docs
}
