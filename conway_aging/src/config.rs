//! Construction parameters for a simulation.

use std::time::Duration;

use crate::board::MAX_AGE;
use crate::error::{LifeError, Result};

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Initial board size, tick interval and age cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval: Duration,
    pub max_age: u8,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            max_age: MAX_AGE,
        }
    }
}

impl LifeConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_max_age(mut self, max_age: u8) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(LifeError::InvalidConfig("tick interval must be positive".into()));
        }
        if self.max_age == 0 {
            return Err(LifeError::InvalidConfig("max age must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LifeConfig::default();
        assert_eq!((config.rows, config.cols), (30, 50));
        assert_eq!(config.tick_interval, Duration::from_millis(60));
        assert_eq!(config.max_age, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let base = LifeConfig::default();
        assert!(matches!(
            base.with_size(0, 10).validate(),
            Err(LifeError::InvalidDimension { rows: 0, cols: 10 })
        ));
        assert!(matches!(
            base.with_tick_interval(Duration::ZERO).validate(),
            Err(LifeError::InvalidConfig(_))
        ));
        assert!(matches!(
            base.with_max_age(0).validate(),
            Err(LifeError::InvalidConfig(_))
        ));
    }
}
