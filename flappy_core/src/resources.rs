use crate::params::Params;

/// Per-run mutable state shared by the input handler and the tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    pub velocity: f32,  // Vertical, positive = down
    pub ticks: u64,     // Steps simulated in the current run
    pub next_pair: u64, // Sequence number for the next spawned pipe pair
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Running and best score, in half-point increments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score {
    pub current: f32,
    pub best: f32, // Highest score seen this process, never lowered
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one passed pipe
    pub fn credit_pipe(&mut self) {
        self.current += Params::POINTS_PER_PIPE;
    }

    /// Fold the running score into the best score. Returns true on a new best.
    pub fn record_best(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }

    pub fn reset_current(&mut self) {
        self.current = 0.0;
    }

    /// Whole points as shown on screen (half points truncate)
    pub fn display(&self) -> u32 {
        self.current as u32
    }

    pub fn display_best(&self) -> u32 {
        self.best as u32
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub started: bool,
    pub flapped: bool,
    pub pipes_spawned: bool,
    pub points_scored: u32, // Half points credited this tick
    pub collided: bool,
    pub out_of_bounds: bool,
    pub new_best: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
