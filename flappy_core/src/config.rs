use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_width: f32,
    pub world_height: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_start_x: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub seed_velocity: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_speed: f32,
    pub pipe_opening: f32,
    pub pipe_y_base: f32,
    pub pipe_y_jitter: f32,
    pub spawn_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: Params::WORLD_WIDTH,
            world_height: Params::WORLD_HEIGHT,
            bird_width: Params::BIRD_WIDTH,
            bird_height: Params::BIRD_HEIGHT,
            bird_start_x: Params::BIRD_START_X,
            bird_start_y: Params::BIRD_START_Y,
            gravity: Params::GRAVITY,
            flap_impulse: Params::FLAP_IMPULSE,
            seed_velocity: Params::SEED_VELOCITY,
            pipe_width: Params::PIPE_WIDTH,
            pipe_height: Params::PIPE_HEIGHT,
            pipe_speed: Params::PIPE_SPEED,
            pipe_opening: Params::PIPE_OPENING,
            pipe_y_base: Params::PIPE_Y_BASE,
            pipe_y_jitter: Params::PIPE_Y_JITTER,
            spawn_threshold: Params::SPAWN_THRESHOLD,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document (missing fields fall back to defaults) and validate it
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject constants that would make the simulation meaningless
    pub fn validate(&self) -> ConfigResult<()> {
        let all = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("bird_start_x", self.bird_start_x),
            ("bird_start_y", self.bird_start_y),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("seed_velocity", self.seed_velocity),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_speed", self.pipe_speed),
            ("pipe_opening", self.pipe_opening),
            ("pipe_y_base", self.pipe_y_base),
            ("pipe_y_jitter", self.pipe_y_jitter),
            ("spawn_threshold", self.spawn_threshold),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("gravity", self.gravity),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_speed", self.pipe_speed),
            ("pipe_opening", self.pipe_opening),
            ("spawn_threshold", self.spawn_threshold),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("seed_velocity", self.seed_velocity),
            ("pipe_y_jitter", self.pipe_y_jitter),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.flap_impulse >= 0.0 {
            return Err(ConfigError::FlapNotUpward {
                value: self.flap_impulse,
            });
        }

        // A freshly spawned pair must scroll past the threshold before the next one
        let limit = self.pipe_spawn_x() - self.pipe_speed;
        if self.spawn_threshold >= limit {
            return Err(ConfigError::SpawnThresholdTooWide {
                threshold: self.spawn_threshold,
                limit,
            });
        }

        let start = self.bird_start();
        if start.x < 0.0
            || start.x > self.world_width
            || start.y < 0.0
            || start.y > self.world_height
        {
            return Err(ConfigError::BirdOutsideWorld {
                x: start.x,
                y: start.y,
            });
        }

        Ok(())
    }

    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.bird_start_x, self.bird_start_y)
    }

    pub fn bird_size(&self) -> Vec2 {
        Vec2::new(self.bird_width, self.bird_height)
    }

    pub fn pipe_size(&self) -> Vec2 {
        Vec2::new(self.pipe_width, self.pipe_height)
    }

    /// X position where new pipe pairs appear (right edge of the world)
    pub fn pipe_spawn_x(&self) -> f32 {
        self.world_width
    }

    /// Whether a y coordinate is inside the playable area
    pub fn in_vertical_bounds(&self, y: f32) -> bool {
        (0.0..=self.world_height).contains(&y)
    }
}
