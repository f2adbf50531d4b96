use serde::Deserialize;

pub const DEFAULT_ADDR: &str = "127.0.0.1:9090";

/// Server settings. Every field can be overridden with a `TODO_`-prefixed
/// environment variable, e.g. `TODO_ADDR=0.0.0.0:8080`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(environment())
    }

    fn load(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("TODO")
}

fn default_addr() -> String {
    DEFAULT_ADDR.to_string()
}
