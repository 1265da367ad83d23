use crate::{Bird, Config, Events, Pipe, Rect};
use hecs::World;

fn bird_rect(world: &World) -> Option<Rect> {
    let mut bird_query = world.query::<&Bird>();
    let rect = bird_query.iter().next().map(|(_e, bird)| bird.rect());
    rect
}

/// Check the bird against every active pipe. Returns true on any hit.
pub fn check_collisions(world: &World, events: &mut Events) -> bool {
    let Some(bird) = bird_rect(world) else {
        return false; // No bird in world
    };

    let hit = world
        .query::<&Pipe>()
        .iter()
        .any(|(_e, pipe)| bird.overlaps(&pipe.rect()));

    if hit {
        events.collided = true;
    }
    hit
}

/// Check whether the bird has left the playable area vertically
pub fn check_bounds(world: &World, config: &Config, events: &mut Events) -> bool {
    let Some(bird) = bird_rect(world) else {
        return false;
    };

    let outside = !config.in_vertical_bounds(bird.top());
    if outside {
        events.out_of_bounds = true;
    }
    outside
}
