//! Front-end configuration loaded from environment variables.
//!
//! | Variable         | Default | Description                                  |
//! |------------------|---------|----------------------------------------------|
//! | `LIFE_ROWS`      | `30`    | Initial board rows                           |
//! | `LIFE_COLS`      | `50`    | Initial board columns                        |
//! | `LIFE_TICK_MS`   | `60`    | Delay between generations in ms              |
//! | `LIFE_MAX_AGE`   | `8`     | Age cap used for fading older cells          |
//! | `LIFE_LOG_LEVEL` | `info`  | tracing filter (trace/debug/info/warn/error) |

use std::time::Duration;

use conway_aging::LifeConfig;

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub life: LifeConfig,
    pub log_level: String,
}

impl UiConfig {
    /// Reads every setting from the environment, falling back to the default
    /// when a variable is absent or does not parse.
    pub fn from_env() -> Self {
        let defaults = LifeConfig::default();
        let tick_ms = env_parse("LIFE_TICK_MS", defaults.tick_interval.as_millis() as u64);
        Self {
            life: LifeConfig {
                rows:          env_parse("LIFE_ROWS", defaults.rows),
                cols:          env_parse("LIFE_COLS", defaults.cols),
                tick_interval: Duration::from_millis(tick_ms),
                max_age:       env_parse("LIFE_MAX_AGE", defaults.max_age),
            },
            log_level: env_str("LIFE_LOG_LEVEL", "info"),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
