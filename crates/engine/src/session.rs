//! Game session - the tick-driven state machine
//!
//! ```text
//! WaitingForStart --key--> Playing --spawn blocked--> GameOver --key--> Playing ...
//!        |                    |
//!        +------- Quit -------+-----> Exited
//! ```
//!
//! The session owns the [`GameState`] and talks to the outside world through
//! three capabilities handed in at construction: a [`CommandSource`], a
//! [`Renderer`], and a [`TickScheduler`]. Hosts that drive ticks themselves call
//! [`Session::step`] directly; [`Session::run`] is the blocking loop used by the
//! terminal binary.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace};

use crate::core::{BoardSnapshot, GameState, RandomSource, SimpleRng};
use crate::resolver::resolve;
use crate::timer::GravityTimer;
use crate::types::{Command, PlayResult, IDLE_POLL_MS, TICK_MS};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for any key to start the first round
    WaitingForStart,
    Playing,
    /// The last round ended; waiting for a key to start another
    GameOver,
    Exited,
}

/// Non-blocking source of player commands.
pub trait CommandSource {
    /// Next pending command, or [`Command::None`] if there is none.
    fn poll(&mut self) -> Result<Command>;
}

/// Receives a frame whenever the visible state changed.
pub trait Renderer {
    fn render(&mut self, snapshot: &BoardSnapshot) -> Result<()>;

    fn phase_changed(&mut self, _phase: Phase) -> Result<()> {
        Ok(())
    }
}

/// Paces the loop between ticks.
pub trait TickScheduler {
    fn sleep_ms(&mut self, ms: u32);
}

impl<T: CommandSource + ?Sized> CommandSource for &mut T {
    fn poll(&mut self) -> Result<Command> {
        (**self).poll()
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, snapshot: &BoardSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }

    fn phase_changed(&mut self, phase: Phase) -> Result<()> {
        (**self).phase_changed(phase)
    }
}

/// Wall-clock scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepScheduler;

impl TickScheduler for SleepScheduler {
    fn sleep_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

pub struct Session<C, V, S, R = SimpleRng> {
    state: GameState<R>,
    timer: GravityTimer,
    input: C,
    renderer: V,
    scheduler: S,
    snapshot: BoardSnapshot,
    phase: Phase,
}

impl<C, V, S, R> Session<C, V, S, R>
where
    C: CommandSource,
    V: Renderer,
    S: TickScheduler,
    R: RandomSource,
{
    pub fn new(state: GameState<R>, input: C, renderer: V, scheduler: S) -> Self {
        let timer = GravityTimer::new(state.config().gravity_ticks);
        Self {
            state,
            timer,
            input,
            renderer,
            scheduler,
            snapshot: BoardSnapshot::default(),
            phase: Phase::WaitingForStart,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &C {
        &self.input
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn set_phase(&mut self, phase: Phase) -> Result<()> {
        self.phase = phase;
        self.renderer.phase_changed(phase)
    }

    fn render(&mut self) -> Result<()> {
        self.state.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot)
    }

    /// Advance the game by exactly one tick.
    ///
    /// Counts the tick, resolves one polled command, then either checks the
    /// spawn that command caused or applies due gravity. The renderer sees at
    /// most one frame per tick.
    pub fn step(&mut self) -> Result<PlayResult> {
        let mut result = PlayResult::Continue;

        self.timer.tick();
        let command = self.input.poll()?;
        let mut flags = resolve(&mut self.state, command);
        trace!(
            "tick {} command {} due {}",
            self.timer.counter(),
            command.as_str(),
            self.timer.is_due()
        );

        if flags.spawned {
            if self.state.spawn_blocked() {
                result = PlayResult::GameOver;
            }
            self.timer.reset();
        } else if self.timer.is_due() {
            if self.state.advance() {
                let removed = self.state.land();
                debug!("gravity landed piece, {} rows cleared", removed);
                if self.state.spawn_blocked() {
                    result = PlayResult::GameOver;
                }
            }
            flags.needs_render = true;
            self.timer.reset();
        }

        if flags.needs_render {
            self.render()?;
        }
        if flags.quit_requested {
            result = PlayResult::Quit;
        }

        Ok(result)
    }

    /// Play one round on a fresh board until it ends.
    pub fn play_round(&mut self) -> Result<PlayResult> {
        self.state.reset();
        self.timer.reset();
        self.set_phase(Phase::Playing)?;
        self.render()?;
        info!("round started with {:?}", self.state.active().kind());

        loop {
            let result = self.step()?;
            match result {
                PlayResult::Continue => self.scheduler.sleep_ms(TICK_MS),
                PlayResult::GameOver => {
                    info!(
                        "game over after {} pieces, {} rows cleared",
                        self.state.pieces(),
                        self.state.rows_cleared()
                    );
                    return Ok(result);
                }
                PlayResult::Quit => {
                    info!("quit during round");
                    return Ok(result);
                }
            }
        }
    }

    /// Poll until a key arrives. Returns `false` for `Quit`.
    ///
    /// The key that starts the round is consumed here and not replayed.
    pub fn wait_for_start(&mut self) -> Result<bool> {
        loop {
            match self.input.poll()? {
                Command::None => self.scheduler.sleep_ms(IDLE_POLL_MS),
                Command::Quit => return Ok(false),
                command => {
                    debug!("woken by {}", command.as_str());
                    return Ok(true);
                }
            }
        }
    }

    /// Run rounds until the player quits.
    pub fn run(&mut self) -> Result<()> {
        self.set_phase(Phase::WaitingForStart)?;

        while self.wait_for_start()? {
            match self.play_round()? {
                PlayResult::Quit => break,
                PlayResult::GameOver => self.set_phase(Phase::GameOver)?,
                PlayResult::Continue => {}
            }
        }

        info!("session exited");
        self.set_phase(Phase::Exited)
    }
}
