use thiserror::Error;

/// Reasons a [`Config`](crate::Config) is rejected before a game is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("flap_impulse must point upward (negative), got {value}")]
    FlapNotUpward { value: f32 },

    #[error("spawn_threshold {threshold} must be below world_width - pipe_speed ({limit})")]
    SpawnThresholdTooWide { threshold: f32, limit: f32 },

    #[error("bird start ({x}, {y}) lies outside the world")]
    BirdOutsideWorld { x: f32, y: f32 },

    #[error("invalid config document: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
