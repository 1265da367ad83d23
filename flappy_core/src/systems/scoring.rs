use crate::{Bird, Events, Pipe, Score};
use hecs::World;

/// Credit half a point for each pipe whose trailing edge the bird has cleared
pub fn check_scoring(world: &mut World, score: &mut Score, events: &mut Events) {
    let bird_x = {
        let mut bird_query = world.query::<&Bird>();
        let x = bird_query.iter().next().map(|(_e, bird)| bird.pos.x);
        x
    };
    let Some(bird_x) = bird_x else {
        return; // No bird in world
    };

    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        if !pipe.passed && bird_x > pipe.trailing_edge() {
            pipe.passed = true;
            score.credit_pipe();
            events.points_scored += 1;
        }
    }
}
