mod state;

pub use state::WatchState;

use std::fmt;
use std::time::Instant;

use crate::clock::Ticker;
use crate::display::Display;
use log::{debug, info, trace};

/// Number of ticks that make up one second on the readout.
///
/// The hundredths counter wraps once it reaches this value, so the largest
/// hundredth ever shown is one less.
#[cfg(not(feature = "centisecond-rollover"))]
pub const HUNDREDTHS_PER_SECOND: u8 = 99;
/// Number of ticks that make up one second on the readout.
#[cfg(feature = "centisecond-rollover")]
pub const HUNDREDTHS_PER_SECOND: u8 = 100;
/// Number of seconds that make up one minute on the readout.
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Render a counter as an at least two character, zero padded decimal.
///
/// # Examples
///
/// ```
/// assert_eq!(format(7), "07");
/// assert_eq!(format(105), "105");
/// ```
pub fn format(value: u64) -> String {
    format!("{:02}", value)
}

/// The elapsed time as shown on the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Readout {
    pub minutes: u64,
    pub seconds: u8,
    pub hundredths: u8,
}

impl Readout {
    /// Advance the readout by one tick.
    fn advance(&mut self) {
        self.hundredths += 1;
        if self.hundredths >= HUNDREDTHS_PER_SECOND {
            self.hundredths %= HUNDREDTHS_PER_SECOND;
            self.seconds += 1;
            if self.seconds >= SECONDS_PER_MINUTE {
                self.seconds %= SECONDS_PER_MINUTE;
                self.minutes += 1;
            }
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            format(self.minutes),
            format(self.seconds as u64),
            format(self.hundredths as u64)
        )
    }
}

/// The stopwatch timer engine.
///
/// Owns the elapsed time, the start/pause/resume/reset state machine and the
/// ticker that drives it. Every tick and every reset is pushed to the
/// display.
pub struct TimerEngine<D> {
    /// Elapsed time.
    readout: Readout,
    /// State machine.
    state: WatchState,
    /// Pending tick schedule.
    ///
    /// `Some` exactly while the watch is running. Dropping the ticker cancels
    /// the schedule, so pausing or resetting can never be followed by a stale
    /// tick.
    ticker: Option<Ticker>,
    /// Tick rate in hertz.
    hz: u32,
    /// Presentation sink.
    display: D,
}

impl<D: Display> TimerEngine<D> {
    /// Create a stopped watch with all counters at zero.
    ///
    /// # Arguments
    ///
    /// * `display` - The display to push the readout to.
    /// * `hz` - The tick rate while running.
    pub fn new(display: D, hz: u32) -> Self {
        Self {
            readout: Readout::default(),
            state: WatchState::Stopped,
            ticker: None,
            hz,
            display,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The instant the next tick is due, if a tick is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().map(Ticker::deadline)
    }

    /// Start a stopped watch.
    ///
    /// Ignored unless the watch is stopped.
    pub fn start(&mut self, now: Instant) {
        if self.state != WatchState::Stopped {
            debug!("Ignoring start while {:?}", self.state);
            return;
        }

        info!("Starting stopwatch at {} Hz", self.hz);
        self.schedule(now);
    }

    /// Pause a running watch.
    ///
    /// The pending tick is cancelled before this returns. Ignored unless the
    /// watch is running.
    pub fn pause(&mut self) {
        if self.state != WatchState::Running {
            debug!("Ignoring pause while {:?}", self.state);
            return;
        }

        self.ticker = None;
        self.state = WatchState::Paused;
        info!("Paused at {}", self.readout);
    }

    /// Resume a paused watch from where it was paused.
    ///
    /// Ignored unless the watch is paused.
    pub fn resume(&mut self, now: Instant) {
        if self.state != WatchState::Paused {
            debug!("Ignoring resume while {:?}", self.state);
            return;
        }

        info!("Resuming at {}", self.readout);
        self.schedule(now);
    }

    /// Stop the watch and zero all counters.
    ///
    /// Valid in every state. The pending tick, if any, is cancelled and the
    /// zeroed readout is pushed to the display.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.state = WatchState::Stopped;
        self.readout = Readout::default();
        info!("Reset");
        self.emit();
    }

    /// The primary control: start when stopped, pause when running and
    /// resume when paused.
    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            WatchState::Stopped => self.start(now),
            WatchState::Running => self.pause(),
            WatchState::Paused => self.resume(now),
        }
    }

    /// Tick if a tick is scheduled and due.
    ///
    /// Fires at most one tick per call. Will return true if a tick was
    /// triggered.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.tick(now),
            None => false,
        };

        if due {
            self.tick();
        }

        due
    }

    /// Advance the elapsed time by one tick and push it to the display.
    ///
    /// Does nothing unless the watch is running.
    pub fn tick(&mut self) {
        if self.state != WatchState::Running {
            return;
        }

        self.readout.advance();
        trace!("tick {}", self.readout);
        self.emit();
    }

    /// Acquire a fresh ticker and enter the running state.
    fn schedule(&mut self, now: Instant) {
        self.ticker = Some(Ticker::new(self.hz, now));
        self.state = WatchState::Running;
    }

    /// Push the formatted readout to the display.
    fn emit(&mut self) {
        let Readout {
            minutes,
            seconds,
            hundredths,
        } = self.readout;

        self.display.show(
            &format(minutes),
            &format(seconds as u64),
            &format(hundredths as u64),
        );
    }
}
