//! Game-state controller: owns the world and session, and is the only entry point a driver needs.

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigResult;
use crate::fsm::{Phase, PhaseAction, PhaseMachine};
use crate::input::FlapButton;
use crate::render::{DrawState, Drawable, Renderer};
use crate::systems::{apply_flap, despawn_pipes};
use crate::{create_bird, step, Bird, Config, Events, Pipe, Score, Session, Sprite};

/// What a flap signal did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapOutcome {
    /// Not-started -> playing; no impulse applied
    Started,
    /// Velocity replaced by the flap impulse
    Flapped,
    /// Game-over -> full reset to not-started
    Reset,
}

pub struct Game<R = StdRng> {
    world: World,
    bird: Entity,
    config: Config,
    fsm: PhaseMachine,
    session: Session,
    score: Score,
    events: Events,
    button: FlapButton,
    rng: R,
}

impl Game<StdRng> {
    /// Build a game with an entropy-seeded RNG
    pub fn new(config: Config) -> ConfigResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build a game whose pipe placement is reproducible from `seed`
    pub fn seeded(config: Config, seed: u64) -> ConfigResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: Config, rng: R) -> ConfigResult<Self> {
        config.validate()?;

        let mut world = World::new();
        let bird = create_bird(&mut world, &config);

        Ok(Self {
            world,
            bird,
            config,
            fsm: PhaseMachine::new(),
            session: Session::new(),
            score: Score::new(),
            events: Events::new(),
            button: FlapButton::new(),
            rng,
        })
    }

    /// Primary action signal
    pub fn handle_flap(&mut self) -> FlapOutcome {
        match self.fsm.phase() {
            Phase::GameOver => {
                if self.fsm.transition(PhaseAction::Restart).success {
                    self.reset();
                }
                FlapOutcome::Reset
            }
            Phase::NotStarted => {
                self.events.started = self.fsm.transition(PhaseAction::Start).success;
                FlapOutcome::Started
            }
            Phase::Playing => {
                apply_flap(&mut self.session, &self.config);
                self.events.flapped = true;
                FlapOutcome::Flapped
            }
        }
    }

    /// Raw key press from the driver. Held keys flap once.
    pub fn key_down(&mut self, key: &str) -> Option<FlapOutcome> {
        if self.button.key_down(key) {
            Some(self.handle_flap())
        } else {
            None
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.button.key_up(key);
    }

    /// Advance one frame. Does nothing unless playing.
    pub fn tick(&mut self) {
        if !self.fsm.is_playing() {
            return;
        }

        let game_over = step(
            &mut self.world,
            &mut self.session,
            &mut self.score,
            &mut self.events,
            &self.config,
            &mut self.rng,
        );

        if game_over && self.fsm.transition(PhaseAction::Crash).success {
            if self.score.record_best() {
                self.events.new_best = true;
                log::info!("new best score {}", self.score.best);
            }
            log::info!(
                "game over after {} ticks: score {} best {}",
                self.session.ticks,
                self.score.current,
                self.score.best
            );
        }
    }

    /// Back to not-started: score 0, bird at start, no velocity, no pipes. Best score survives.
    pub fn reset(&mut self) {
        self.score.reset_current();
        self.session.reset();
        self.fsm.reset();

        let start = self.config.bird_start();
        if let Ok(mut bird) = self.world.get::<&mut Bird>(self.bird) {
            bird.pos = start;
        }

        despawn_pipes(&mut self.world, |_| true);

        log::info!("game reset (best {})", self.score.best);
    }

    /// Immutable snapshot for the renderer
    pub fn draw_state(&self) -> DrawState {
        DrawState {
            bird: Drawable {
                rect: self.bird().rect(),
                sprite: Sprite::Bird,
            },
            pipes: self
                .pipes()
                .iter()
                .map(|pipe| Drawable {
                    rect: pipe.rect(),
                    sprite: pipe.sprite.into(),
                })
                .collect(),
            score: self.score.current,
            best_score: self.score.best,
            phase: self.fsm.phase(),
        }
    }

    /// One driver frame: tick, hand the snapshot to the renderer, then start a fresh event set
    pub fn frame(&mut self, renderer: &mut impl Renderer) {
        self.tick();
        renderer.draw(&self.draw_state());
        self.events.clear();
    }

    /// Events since the last frame, clearing them
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn velocity(&self) -> f32 {
        self.session.velocity
    }

    pub fn ticks(&self) -> u64 {
        self.session.ticks
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bird(&self) -> Bird {
        *self
            .world
            .get::<&Bird>(self.bird)
            .expect("bird entity lives as long as the game")
    }

    /// Active pipes ordered by spawn, top before bottom
    pub fn pipes(&self) -> Vec<Pipe> {
        let mut pipes: Vec<Pipe> = self
            .world
            .query::<&Pipe>()
            .iter()
            .map(|(_e, pipe)| *pipe)
            .collect();
        pipes.sort_by_key(|pipe| (pipe.pair, pipe.sprite));
        pipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, PipeSprite};
    use glam::Vec2;

    fn game() -> Game {
        Game::seeded(Config::new(), 12345).unwrap()
    }

    fn set_bird(game: &mut Game, pos: Vec2) {
        let mut bird = game.world.get::<&mut Bird>(game.bird).unwrap();
        bird.pos = pos;
    }

    #[test]
    fn test_new_game_is_not_started() {
        let game = game();
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.bird().pos, Vec2::new(90.0, 320.0));
        assert!(game.pipes().is_empty());
        assert_eq!(game.velocity(), 0.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            world_width: -720.0,
            ..Config::new()
        };
        assert!(matches!(
            Game::seeded(config, 1),
            Err(ConfigError::NotPositive {
                field: "world_width",
                ..
            })
        ));
    }

    #[test]
    fn test_tick_ignored_before_start() {
        let mut game = game();
        for _ in 0..10 {
            game.tick();
        }
        assert_eq!(game.bird().pos.y, 320.0);
        assert!(game.pipes().is_empty());
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn test_start_does_not_flap() {
        let mut game = game();
        assert_eq!(game.handle_flap(), FlapOutcome::Started);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.velocity(), 0.0);
        assert_eq!(game.bird().pos.y, 320.0);
        assert!(game.events().started);
    }

    #[test]
    fn test_flap_while_playing_sets_impulse() {
        let mut game = game();
        game.handle_flap();
        game.tick();
        game.tick();
        assert_eq!(game.handle_flap(), FlapOutcome::Flapped);
        assert_eq!(game.velocity(), -9.0);
        game.tick();
        assert_eq!(game.velocity(), -8.0);
    }

    #[test]
    fn test_first_tick_spawns_pair() {
        let mut game = game();
        game.handle_flap();
        game.tick();

        let pipes = game.pipes();
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes[0].sprite, PipeSprite::Top);
        assert_eq!(pipes[0].pos.x, 720.0);
    }

    #[test]
    fn test_collision_ends_game_and_records_best() {
        let mut game = game();
        game.handle_flap();
        game.score.current = 4.5;
        game.world.spawn((Pipe::new(
            Vec2::new(90.0, 300.0),
            Vec2::new(64.0, 100.0),
            PipeSprite::Bottom,
            99,
        ),));

        game.tick();

        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.score().best, 4.5);
        assert!(game.events().collided);
        assert!(game.events().new_best);
    }

    #[test]
    fn test_crash_frame_still_spawns_pipes() {
        let config = Config {
            bird_start_y: 638.0,
            ..Config::new()
        };
        let mut game = Game::seeded(config, 12345).unwrap();
        game.handle_flap();

        game.tick();

        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.events().out_of_bounds);
        assert!(game.events().pipes_spawned);
        let pipes = game.pipes();
        assert_eq!(pipes.len(), 2);
        assert!(pipes.iter().all(|p| p.pos.x == 720.0));
    }

    #[test]
    fn test_spawn_threshold_past_edge_rejected() {
        let config = Config {
            spawn_threshold: 2000.0,
            ..Config::new()
        };
        assert!(matches!(
            Game::seeded(config, 1),
            Err(ConfigError::SpawnThresholdTooWide { .. })
        ));
    }

    #[test]
    fn test_game_over_freezes_ticks() {
        let mut game = game();
        game.handle_flap();
        set_bird(&mut game, Vec2::new(90.0, 639.0));
        game.tick();
        assert_eq!(game.phase(), Phase::GameOver);

        let frozen = game.draw_state();
        for _ in 0..5 {
            game.tick();
        }
        assert_eq!(game.draw_state(), frozen);
    }

    #[test]
    fn test_flap_after_game_over_resets() {
        let mut game = game();
        game.handle_flap();
        game.score.current = 2.0;
        set_bird(&mut game, Vec2::new(90.0, -5.0));
        game.tick();
        assert_eq!(game.phase(), Phase::GameOver);

        assert_eq!(game.handle_flap(), FlapOutcome::Reset);

        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.score().current, 0.0);
        assert_eq!(game.score().best, 2.0);
        assert_eq!(game.bird().pos, Vec2::new(90.0, 320.0));
        assert_eq!(game.velocity(), 0.0);
        assert!(game.pipes().is_empty());
    }

    #[test]
    fn test_held_key_flaps_once() {
        let mut game = game();
        assert_eq!(game.key_down(" "), Some(FlapOutcome::Started));
        assert_eq!(game.key_down(" "), None);
        game.tick();
        assert_eq!(game.key_down(" "), None);
        assert_eq!(game.velocity(), 3.0);

        game.key_up(" ");
        assert_eq!(game.key_down(" "), Some(FlapOutcome::Flapped));
        assert_eq!(game.key_down("Enter"), None);
    }

    #[test]
    fn test_frame_draws_and_clears_events() {
        let mut game = game();
        game.handle_flap();
        let mut frames: Vec<DrawState> = Vec::new();

        game.frame(&mut |state: &DrawState| frames.push(state.clone()));

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].phase, Phase::Playing);
        assert_eq!(frames[0].pipes.len(), 2);
        assert_eq!(frames[0].bird.sprite, Sprite::Bird);
        assert_eq!(game.events(), &Events::default());
    }

    #[test]
    fn test_take_events() {
        let mut game = game();
        game.handle_flap();
        game.tick();
        let events = game.take_events();
        assert!(events.started);
        assert!(events.pipes_spawned);
        assert_eq!(game.events(), &Events::default());
    }
}
