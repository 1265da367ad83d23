//! Render boundary: the read-only snapshot handed to whatever draws the game

use serde::Serialize;

use crate::{Phase, Rect, Sprite};

/// One rectangle to draw with the sprite that fills it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drawable {
    pub rect: Rect,
    pub sprite: Sprite,
}

/// Everything the renderer needs for one frame. Owned, so it cannot alias game state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawState {
    pub bird: Drawable,
    pub pipes: Vec<Drawable>, // Ordered by spawn, top before bottom
    pub score: f32,
    pub best_score: f32,
    pub phase: Phase,
}

impl DrawState {
    /// Score as whole points (half points truncate)
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    pub fn display_best(&self) -> u32 {
        self.best_score as u32
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Something that turns a snapshot into pixels
pub trait Renderer {
    fn draw(&mut self, state: &DrawState);
}

impl<F: FnMut(&DrawState)> Renderer for F {
    fn draw(&mut self, state: &DrawState) {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state(score: f32, best: f32) -> DrawState {
        DrawState {
            bird: Drawable {
                rect: Rect::new(Vec2::new(90.0, 320.0), Vec2::new(34.0, 24.0)),
                sprite: Sprite::Bird,
            },
            pipes: Vec::new(),
            score,
            best_score: best,
            phase: Phase::GameOver,
        }
    }

    #[test]
    fn test_display_truncates_half_points() {
        let s = state(2.5, 7.5);
        assert_eq!(s.display_score(), 2);
        assert_eq!(s.display_best(), 7);
    }

    #[test]
    fn test_closure_renderer() {
        let mut frames = Vec::new();
        {
            let mut renderer = |s: &DrawState| frames.push(s.clone());
            renderer.draw(&state(1.0, 1.0));
        }
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_json_snapshot() {
        let json = state(1.5, 3.0).to_json().unwrap();
        assert!(json.contains("\"phase\":\"GameOver\""));
        assert!(json.contains("\"sprite\":\"Bird\""));
        assert!(json.contains("\"score\":1.5"));
    }
}
