/// Game tuning parameters for Flappy Bird
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // World (pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 720.0;
    pub const WORLD_HEIGHT: f32 = 640.0;

    // Bird
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    pub const BIRD_START_X: f32 = Self::WORLD_WIDTH / 8.0;
    pub const BIRD_START_Y: f32 = Self::WORLD_HEIGHT / 2.0;

    // Physics (per tick)
    pub const GRAVITY: f32 = 1.0;
    pub const FLAP_IMPULSE: f32 = -9.0;
    pub const SEED_VELOCITY: f32 = 2.0; // Applied once so the first frame is not floaty

    // Pipes
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;
    pub const PIPE_SPEED: f32 = 4.0;
    pub const PIPE_OPENING: f32 = Self::WORLD_HEIGHT / 4.0;
    pub const PIPE_Y_BASE: f32 = -Self::PIPE_HEIGHT / 4.0;
    pub const PIPE_Y_JITTER: f32 = Self::PIPE_HEIGHT / 2.0;
    pub const SPAWN_THRESHOLD: f32 = Self::WORLD_WIDTH / 2.0;

    // Score
    pub const POINTS_PER_PIPE: f32 = 0.5;
}
