pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod geometry;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use rand::Rng;
use systems::*;

/// Run one frame of the Flappy Bird simulation. Returns true if the bird crashed.
pub fn step(
    world: &mut World,
    session: &mut Session,
    score: &mut Score,
    events: &mut Events,
    config: &Config,
    rng: &mut impl Rng,
) -> bool {
    // 1. Gravity and bird position
    move_bird(world, session, config);

    // 2. Scroll pipes left
    scroll_pipes(world, config);

    // 3. Credit pipes the bird has cleared
    check_scoring(world, score, events);

    // 4. Bird vs pipes, bird vs world edges
    let crashed = check_collisions(world, events);
    let out_of_bounds = check_bounds(world, config, events);

    // 5. Drop pipes that left the screen
    gc(world);

    // 6. Keep the stream of pipes going, even on the frame the bird crashes
    spawn_pipes(world, session, config, events, rng);

    session.ticks += 1;
    crashed || out_of_bounds
}

/// Helper to create the bird entity at its start position
pub fn create_bird(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Bird::new(config.bird_start(), config.bird_size()),))
}

/// Helper to create a top/bottom pipe pair; `top` is the top pipe's corner
pub fn create_pipe_pair(
    world: &mut World,
    config: &Config,
    top: Vec2,
    pair: u64,
) -> (hecs::Entity, hecs::Entity) {
    let size = config.pipe_size();
    let bottom = Vec2::new(top.x, top.y + config.pipe_height + config.pipe_opening);
    (
        world.spawn((Pipe::new(top, size, PipeSprite::Top, pair),)),
        world.spawn((Pipe::new(bottom, size, PipeSprite::Bottom, pair),)),
    )
}
