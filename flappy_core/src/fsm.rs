//! Game phase state machine
//!
//! Governs whether ticks advance the simulation and what the renderer shows.

use serde::Serialize;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Start,
    Crash,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: PhaseAction,
}

/// Phase finite state machine
#[derive(Debug, Clone, Default)]
pub struct PhaseMachine {
    phase: Phase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Attempt a transition; invalid actions leave the phase untouched
    pub fn transition(&mut self, action: PhaseAction) -> TransitionResult {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                log::info!("phase {:?} -> {:?} ({:?})", from, to, action);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                log::debug!("ignored {:?} in phase {:?}", action, from);
                TransitionResult {
                    success: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    fn next_phase(&self, action: PhaseAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::NotStarted, PhaseAction::Start) => Some(Phase::Playing),
            (Phase::Playing, PhaseAction::Crash) => Some(Phase::GameOver),
            (Phase::GameOver, PhaseAction::Restart) => Some(Phase::NotStarted),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Force back to not-started regardless of current phase
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
    }
}
