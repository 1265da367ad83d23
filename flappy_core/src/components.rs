use glam::Vec2;
use serde::Serialize;

use crate::geometry::Rect;

/// Sprite identity handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sprite {
    Bird,
    TopPipe,
    BottomPipe,
}

/// Which half of a pipe pair a pipe is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipeSprite {
    Top,
    Bottom,
}

impl From<PipeSprite> for Sprite {
    fn from(sprite: PipeSprite) -> Self {
        match sprite {
            PipeSprite::Top => Sprite::TopPipe,
            PipeSprite::Bottom => Sprite::BottomPipe,
        }
    }
}

/// Bird component - the player
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub pos: Vec2,  // Top-left corner
    pub size: Vec2, // Fixed for the bird's lifetime
}

impl Bird {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Pipe component - one half of an obstacle pair
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: PipeSprite,
    pub passed: bool, // Latched once the bird clears the trailing edge
    pub pair: u64,    // Spawn sequence number shared by both halves
}

impl Pipe {
    pub fn new(pos: Vec2, size: Vec2, sprite: PipeSprite, pair: u64) -> Self {
        Self {
            pos,
            size,
            sprite,
            passed: false,
            pair,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully scrolled past the left world boundary
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_starts_unpassed() {
        let pipe = Pipe::new(
            Vec2::new(720.0, -128.0),
            Vec2::new(64.0, 512.0),
            PipeSprite::Top,
            0,
        );
        assert!(!pipe.passed);
        assert_eq!(pipe.trailing_edge(), 784.0);
    }

    #[test]
    fn test_pipe_off_screen_exactly_at_zero() {
        let size = Vec2::new(64.0, 512.0);
        let gone = Pipe::new(Vec2::new(-64.0, 0.0), size, PipeSprite::Bottom, 0);
        let visible = Pipe::new(Vec2::new(-63.0, 0.0), size, PipeSprite::Bottom, 0);
        assert!(gone.is_off_screen());
        assert!(!visible.is_off_screen());
    }

    #[test]
    fn test_pipe_sprite_maps_to_sprite() {
        assert_eq!(Sprite::from(PipeSprite::Top), Sprite::TopPipe);
        assert_eq!(Sprite::from(PipeSprite::Bottom), Sprite::BottomPipe);
    }
}
