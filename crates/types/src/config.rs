//! Engine configuration.
//!
//! The engine itself only ever sees an [`EngineConfig`] value. Front ends build
//! one from defaults, or from environment variables via [`EngineConfig::from_env`]:
//!
//! - `BITRIS_WIDTH`: board width (default 10)
//! - `BITRIS_HEIGHT`: board height (default 20)
//! - `BITRIS_GRAVITY_TICKS`: ticks per gravity step (default 25)
//! - `BITRIS_SHOW_NEXT`: "1"/"true" to enable the next-piece preview (default on)
//! - `BITRIS_RANDOM_ROTATE`: "1"/"true" to spawn pieces in a random orientation (default off)
//!
//! Unparseable values fall back to the default. Parsed values still have to pass
//! [`EngineConfig::validate`].

use thiserror::Error;

use crate::{
    BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_TICKS, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MIN_BOARD_SIDE,
};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is outside 4..=24")]
    Width(u8),
    #[error("board height {0} is outside 4..=40")]
    Height(u8),
    #[error("gravity threshold must be at least one tick")]
    GravityTicks,
}

/// Board size, gravity cadence, and spawn options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub gravity_ticks: u32,
    pub show_next: bool,
    pub random_rotate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity_ticks: GRAVITY_TICKS,
            show_next: true,
            random_rotate: false,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gravity_ticks(mut self, ticks: u32) -> Self {
        self.gravity_ticks = ticks;
        self
    }

    pub fn with_show_next(mut self, show_next: bool) -> Self {
        self.show_next = show_next;
        self
    }

    pub fn with_random_rotate(mut self, random_rotate: bool) -> Self {
        self.random_rotate = random_rotate;
        self
    }

    /// Check the values against the engine's fixed limits.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIDE..=MAX_BOARD_WIDTH).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !(MIN_BOARD_SIDE..=MAX_BOARD_HEIGHT).contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.gravity_ticks == 0 {
            return Err(ConfigError::GravityTicks);
        }
        Ok(self)
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let width = lookup("BITRIS_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup("BITRIS_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let gravity_ticks = lookup("BITRIS_GRAVITY_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.gravity_ticks);
        let show_next = lookup("BITRIS_SHOW_NEXT")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.show_next);
        let random_rotate = lookup("BITRIS_RANDOM_ROTATE")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.random_rotate);

        Self {
            width,
            height,
            gravity_ticks,
            show_next,
            random_rotate,
        }
        .validate()
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.width, 10);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.gravity_ticks, 25);
        assert!(cfg.show_next);
        assert!(!cfg.random_rotate);
        assert_eq!(cfg.validate(), Ok(cfg));
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let cfg = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn lookup_overrides_and_flags() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[
            ("BITRIS_WIDTH", "12"),
            ("BITRIS_HEIGHT", " 24 "),
            ("BITRIS_GRAVITY_TICKS", "10"),
            ("BITRIS_SHOW_NEXT", "false"),
            ("BITRIS_RANDOM_ROTATE", "1"),
        ]))
        .unwrap();
        assert_eq!(cfg.width, 12);
        assert_eq!(cfg.height, 24);
        assert_eq!(cfg.gravity_ticks, 10);
        assert!(!cfg.show_next);
        assert!(cfg.random_rotate);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let cfg = EngineConfig::from_lookup(lookup_from(&[
            ("BITRIS_WIDTH", "wide"),
            ("BITRIS_SHOW_NEXT", "maybe"),
        ]))
        .unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(
            EngineConfig::from_lookup(lookup_from(&[("BITRIS_WIDTH", "3")])),
            Err(ConfigError::Width(3))
        );
        assert_eq!(
            EngineConfig::default().with_size(10, 41).validate(),
            Err(ConfigError::Height(41))
        );
        assert_eq!(
            EngineConfig::default().with_gravity_ticks(0).validate(),
            Err(ConfigError::GravityTicks)
        );
        assert!(EngineConfig::default().with_size(24, 4).validate().is_ok());
    }
}
