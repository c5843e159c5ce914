//! Configuration for a game

use std::time::Duration;

use crate::error::{Result, TetrisError};

/// Board width in cells
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells
pub const BOARD_HEIGHT: usize = 20;

/// Main configuration shared by every board of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity interval at level 0 (in milliseconds)
    pub gravity_base_ms: u64,

    /// Amount the gravity interval shrinks per level (in milliseconds)
    pub gravity_step_ms: u64,

    /// Fastest allowed gravity interval (in milliseconds)
    pub gravity_min_ms: u64,

    /// Award one point per row travelled by a hard drop
    pub hard_drop_scoring: bool,

    /// Column where new pieces appear
    pub spawn_column: usize,

    /// Seed for piece order, colors and penalty holes (OS entropy if None)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_base_ms: 1000,
            gravity_step_ms: 100,
            gravity_min_ms: 100,
            hard_drop_scoring: true,
            spawn_column: 4,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level 0 gravity interval in milliseconds
    pub fn with_gravity_base_ms(mut self, base_ms: u64) -> Self {
        self.gravity_base_ms = base_ms;
        self
    }

    /// Set the per-level gravity speedup in milliseconds
    pub fn with_gravity_step_ms(mut self, step_ms: u64) -> Self {
        self.gravity_step_ms = step_ms;
        self
    }

    /// Set the minimum gravity interval in milliseconds
    pub fn with_gravity_min_ms(mut self, min_ms: u64) -> Self {
        self.gravity_min_ms = min_ms;
        self
    }

    /// Enable or disable drop-distance scoring for hard drops
    pub fn with_hard_drop_scoring(mut self, enabled: bool) -> Self {
        self.hard_drop_scoring = enabled;
        self
    }

    /// Set the spawn column
    pub fn with_spawn_column(mut self, column: usize) -> Self {
        self.spawn_column = column;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Gravity interval for the given level
    ///
    /// `base - level * step`, never below `gravity_min_ms`.
    pub fn gravity_interval(&self, level: u32) -> Duration {
        let speedup = self.gravity_step_ms.saturating_mul(u64::from(level));
        let ms = self
            .gravity_base_ms
            .saturating_sub(speedup)
            .max(self.gravity_min_ms);
        Duration::from_millis(ms)
    }

    /// Check that the configuration describes a playable game
    pub fn validate(&self) -> Result<()> {
        if self.gravity_min_ms == 0 {
            return Err(TetrisError::InvalidConfig(
                "gravity_min_ms must be greater than zero".to_string(),
            ));
        }
        if self.gravity_base_ms < self.gravity_min_ms {
            return Err(TetrisError::InvalidConfig(format!(
                "gravity_base_ms ({}) is below gravity_min_ms ({})",
                self.gravity_base_ms, self.gravity_min_ms
            )));
        }
        if self.spawn_column >= BOARD_WIDTH {
            return Err(TetrisError::InvalidConfig(format!(
                "spawn_column {} is outside a {}-wide board",
                self.spawn_column, BOARD_WIDTH
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn_column, 4);
        assert!(config.hard_drop_scoring);
    }

    #[test]
    fn test_gravity_interval_shrinks_and_clamps() {
        let config = GameConfig::new()
            .with_gravity_base_ms(800)
            .with_gravity_step_ms(150)
            .with_gravity_min_ms(200);
        assert_eq!(config.gravity_interval(0), Duration::from_millis(800));
        assert_eq!(config.gravity_interval(1), Duration::from_millis(650));
        assert_eq!(config.gravity_interval(4), Duration::from_millis(200));
        assert_eq!(config.gravity_interval(40), Duration::from_millis(200));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GameConfig::new().with_gravity_min_ms(0).validate().is_err());
        assert!(
            GameConfig::new()
                .with_gravity_base_ms(50)
                .with_gravity_min_ms(100)
                .validate()
                .is_err()
        );
        let err = GameConfig::new().with_spawn_column(10).validate().unwrap_err();
        assert!(matches!(err, TetrisError::InvalidConfig(_)));
    }
}
