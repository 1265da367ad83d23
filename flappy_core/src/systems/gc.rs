use hecs::World;

use crate::components::*;

/// Despawn every pipe matching `expired`, returning how many went
pub fn despawn_pipes(world: &mut World, expired: impl Fn(&Pipe) -> bool) -> usize {
    let mut to_remove = Vec::new();

    for (entity, pipe) in world.query::<&Pipe>().iter() {
        if expired(pipe) {
            to_remove.push(entity);
        }
    }

    let removed = to_remove.len();
    for entity in to_remove {
        let _ = world.despawn(entity);
    }
    removed
}

/// Garbage collection: despawn pipes that scrolled off the left edge
pub fn gc(world: &mut World) -> usize {
    let removed = despawn_pipes(world, Pipe::is_off_screen);
    if removed > 0 {
        log::debug!("despawned {} off-screen pipes", removed);
    }
    removed
}
