use crate::{create_pipe_pair, Config, Events, Pipe, Session};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// X position of the most recently spawned pair, if any pipes are alive
pub fn latest_pair_x(world: &World) -> Option<f32> {
    let mut query = world.query::<&Pipe>();
    let latest = query
        .iter()
        .max_by_key(|(_e, pipe)| pipe.pair)
        .map(|(_e, pipe)| pipe.pos.x);
    latest
}

/// Top pipe y for a new pair: base offset minus a uniform whole-pixel jitter
pub fn random_top_y(config: &Config, rng: &mut impl Rng) -> f32 {
    let jitter = if config.pipe_y_jitter > 0.0 {
        let draw: f32 = rng.gen_range(0.0..config.pipe_y_jitter);
        draw.floor()
    } else {
        0.0
    };
    config.pipe_y_base - jitter
}

/// Spawn a pipe pair at the right edge when the previous pair has scrolled far enough
pub fn spawn_pipes(
    world: &mut World,
    session: &mut Session,
    config: &Config,
    events: &mut Events,
    rng: &mut impl Rng,
) {
    let due = match latest_pair_x(world) {
        None => true,
        Some(x) => x < config.spawn_threshold,
    };
    if !due {
        return;
    }

    let top_y = random_top_y(config, rng);
    let pair = session.next_pair;
    session.next_pair += 1;

    create_pipe_pair(world, config, Vec2::new(config.pipe_spawn_x(), top_y), pair);
    events.pipes_spawned = true;
    log::debug!("spawned pipe pair {} with top y={}", pair, top_y);
}
