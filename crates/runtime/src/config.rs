//! Output configuration
//!
//! Controls how `print_line` treats a mismatch between the number of `{}`
//! placeholders in a template and the number of supplied arguments.
//!
//! ## Configuration (Environment Variables)
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VELOCITY_ARGUMENT_POLICY` | `strict` | `strict` (counts must match) or `lenient` (surplus arguments ignored) |
//!
//! The process-wide configuration is read from the environment the first
//! time it is needed and cached afterwards. Generated entry points may
//! [`install`](PrintConfig::install) their own before the first print.

use std::sync::OnceLock;
use tracing::warn;

/// Environment variable selecting the [`ArgumentPolicy`]
pub const ARGUMENT_POLICY_ENV: &str = "VELOCITY_ARGUMENT_POLICY";

static GLOBAL_CONFIG: OnceLock<PrintConfig> = OnceLock::new();

/// What to do when placeholders and arguments disagree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgumentPolicy {
    /// Counts must match exactly (default)
    #[default]
    Strict,
    /// Surplus arguments are ignored; missing arguments are still an error
    Lenient,
}

impl ArgumentPolicy {
    /// Parse a policy name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "strict" => Some(ArgumentPolicy::Strict),
            "lenient" => Some(ArgumentPolicy::Lenient),
            _ => None,
        }
    }
}

/// Output engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintConfig {
    pub argument_policy: ArgumentPolicy,
}

impl PrintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_argument_policy(mut self, policy: ArgumentPolicy) -> Self {
        self.argument_policy = policy;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let argument_policy = match std::env::var(ARGUMENT_POLICY_ENV) {
            Ok(value) => ArgumentPolicy::parse(&value).unwrap_or_else(|| {
                warn!(
                    value = %value,
                    "{} not recognized, using strict",
                    ARGUMENT_POLICY_ENV
                );
                ArgumentPolicy::Strict
            }),
            Err(_) => ArgumentPolicy::Strict,
        };

        Self { argument_policy }
    }

    /// The process-wide configuration, loaded from the environment on first use
    pub fn global() -> &'static PrintConfig {
        GLOBAL_CONFIG.get_or_init(Self::from_env)
    }

    /// Install the process-wide configuration
    ///
    /// Returns false if a configuration was already installed or loaded.
    pub fn install(config: PrintConfig) -> bool {
        GLOBAL_CONFIG.set(config).is_ok()
    }
}
