//! Frame-driven game loop
//!
//! The host calls [`GameLoop::frame`] once per display frame. Each frame runs
//! one tick, paints it, and asks the scheduler for the next frame while the
//! loop is running. Stopping just means the next frame is never requested.

use crate::config::FieldConfig;
use crate::consts::FRAME_INTERVAL_SECS;
use crate::renderer::Renderer;
use crate::sim::{InputState, SimulationState, TickEvents, tick};

/// Lifecycle of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, never started
    Idle,
    /// Ticking every frame
    Running,
    /// No further frames will be requested until start/reset/restart
    Stopped,
}

/// Something that will call [`GameLoop::frame`] at the next frame boundary
pub trait Scheduler {
    /// Returns false if the host refused; no frame will arrive.
    fn request_frame(&mut self) -> bool;
}

/// Owns the simulation and drives it one tick per frame
#[derive(Debug, Clone)]
pub struct GameLoop {
    sim: SimulationState,
    input: InputState,
    state: LoopState,
    /// A frame has been requested and not yet delivered
    frame_pending: bool,
}

impl GameLoop {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            sim: SimulationState::new(config),
            input: InputState::default(),
            state: LoopState::Idle,
            frame_pending: false,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.sim
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Key handlers write paddle intents here
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn score_left(&self) -> u32 {
        self.sim.score.left
    }

    pub fn score_right(&self) -> u32 {
        self.sim.score.right
    }

    /// Begin (or resume) ticking. No-op if already running.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) {
        if self.state == LoopState::Running {
            return;
        }
        log::info!("Game loop started (from {:?})", self.state);
        self.state = LoopState::Running;
        self.request_frame(scheduler);
    }

    /// Stop after the current frame. An already requested frame still
    /// arrives, but does nothing.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Game loop stopped at tick {}", self.sim.ticks);
            self.state = LoopState::Stopped;
        }
    }

    /// Zero the scores and make sure the loop is running. Ball and paddles
    /// stay where they are; use [`restart`](Self::restart) for a fresh field.
    pub fn reset(&mut self, scheduler: &mut impl Scheduler) {
        self.sim.score.clear();
        log::info!("Scores reset");
        if self.state != LoopState::Running {
            self.state = LoopState::Running;
            self.request_frame(scheduler);
        }
    }

    /// Full reset: new field, centred paddles and ball, no held keys, 0-0
    pub fn restart(&mut self, scheduler: &mut impl Scheduler) {
        self.sim = SimulationState::new(self.sim.config.clone());
        self.input = InputState::default();
        log::info!("Game restarted");
        self.state = LoopState::Running;
        self.request_frame(scheduler);
    }

    /// Deliver one frame. Returns the tick's events, or `None` if the loop
    /// was not running and nothing happened.
    pub fn frame<R>(&mut self, renderer: &mut R, scheduler: &mut impl Scheduler) -> Option<TickEvents>
    where
        R: Renderer + ?Sized,
    {
        self.frame_pending = false;
        if self.state != LoopState::Running {
            return None;
        }

        let events = tick(&mut self.sim, &self.input);
        self.log_events(&events);

        if let Err(e) = renderer.render(&self.sim.snapshot()) {
            log::error!("Render failed, stopping game loop: {}", e);
            self.state = LoopState::Stopped;
            return Some(events);
        }

        self.request_frame(scheduler);
        Some(events)
    }

    /// Keep at most one frame in flight so ticks never double up. If the
    /// scheduler cannot deliver, the loop stops instead of waiting forever.
    fn request_frame(&mut self, scheduler: &mut impl Scheduler) {
        if self.frame_pending {
            return;
        }
        if scheduler.request_frame() {
            self.frame_pending = true;
        } else {
            log::error!("Frame request refused, stopping game loop");
            self.state = LoopState::Stopped;
        }
    }

    fn log_events(&self, events: &TickEvents) {
        if events.wall_bounce {
            log::debug!("Wall bounce at tick {}", self.sim.ticks);
        }
        if let Some(side) = events.paddle_hit {
            log::debug!("{} paddle hit at tick {}", side.as_str(), self.sim.ticks);
        }
        if let Some(side) = events.scored {
            log::info!(
                "Point to {} ({} - {})",
                side.as_str(),
                self.sim.score.left,
                self.sim.score.right
            );
        }
    }
}

/// Headless scheduler on a virtual clock: every delivered frame advances time
/// by a fixed interval, regardless of how long the frame took.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    interval: f64,
    now: f64,
    pending: bool,
    frames: u64,
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_SECS)
    }
}

impl FixedStepScheduler {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs,
            now: 0.0,
            pending: false,
            frames: 0,
        }
    }

    /// Virtual time in seconds
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Frames delivered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Deliver the pending frame, if any. Returns that frame's tick events.
    pub fn step<R>(&mut self, game: &mut GameLoop, renderer: &mut R) -> Option<TickEvents>
    where
        R: Renderer + ?Sized,
    {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.now += self.interval;
        self.frames += 1;
        game.frame(renderer, self)
    }

    /// Deliver frames until the loop stops asking or `max_frames` have been
    /// delivered. Returns how many ticks actually ran.
    pub fn run<R>(&mut self, game: &mut GameLoop, renderer: &mut R, max_frames: u64) -> u64
    where
        R: Renderer + ?Sized,
    {
        let mut ticks = 0;
        for _ in 0..max_frames {
            if !self.pending {
                break;
            }
            if self.step(game, renderer).is_some() {
                ticks += 1;
            }
        }
        ticks
    }
}

impl Scheduler for FixedStepScheduler {
    fn request_frame(&mut self) -> bool {
        self.pending = true;
        true
    }
}
