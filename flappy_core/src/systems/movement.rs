use crate::{Bird, Config, Pipe, Session};
use hecs::World;

/// Apply gravity to the bird and integrate its position
pub fn move_bird(world: &mut World, session: &mut Session, config: &Config) {
    // First tick of a run starts with a small downward push
    if session.ticks == 0 && session.velocity == 0.0 {
        session.velocity = config.seed_velocity;
    }

    session.velocity += config.gravity;

    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.pos.y += session.velocity;
        log::trace!("bird y={} vy={}", bird.pos.y, session.velocity);
    }
}

/// Replace the bird's velocity with the upward flap impulse
pub fn apply_flap(session: &mut Session, config: &Config) {
    session.velocity = config.flap_impulse;
}

/// Scroll every pipe left by the pipe speed
pub fn scroll_pipes(world: &mut World, config: &Config) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        pipe.pos.x -= config.pipe_speed;
    }
}
