//! Deal countdown.
//!
//! [`Countdown`] is the pure hours/minutes/seconds value. [`spawn_countdown`]
//! drives it from a Tokio interval and publishes every value on a watch
//! channel. The task owns its own state and never touches the session/cart
//! store; dropping the returned [`CountdownHandle`] aborts it.

use core::fmt;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Error parsing a countdown from `H:M:S`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountdownParseError {
    #[error("countdown must have the form H:M:S, got {0:?}")]
    Format(String),
    #[error("countdown {field} must be below 60, got {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

/// Time left on the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Remove one second. Holds at `00:00:00`.
    pub const fn tick(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        }
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Total seconds left.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl std::str::FromStr for Countdown {
    type Err = CountdownParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || CountdownParseError::Format(s.to_string());

        let mut parts = s.trim().split(':');
        let mut next = || -> Result<u32, CountdownParseError> {
            parts
                .next()
                .ok_or_else(format_err)?
                .parse::<u32>()
                .map_err(|_| format_err())
        };
        let (hours, minutes, seconds) = (next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(format_err());
        }

        for (field, value) in [("minutes", minutes), ("seconds", seconds)] {
            if value >= 60 {
                return Err(CountdownParseError::OutOfRange { field, value });
            }
        }

        Ok(Self::new(hours, minutes, seconds))
    }
}

/// Owner of a running countdown task.
///
/// The task is aborted when the handle is cancelled or dropped.
#[derive(Debug)]
pub struct CountdownHandle {
    task: JoinHandle<()>,
    rx: watch::Receiver<Countdown>,
}

impl CountdownHandle {
    /// A receiver that observes every published value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.rx.clone()
    }

    /// Most recently published value.
    #[must_use]
    pub fn current(&self) -> Countdown {
        *self.rx.borrow()
    }

    /// Returns `true` once the task has stopped (expired or cancelled).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the task now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `start` down to zero, one tick per `period`.
///
/// Must be called from within a Tokio runtime.
#[must_use]
pub fn spawn_countdown(start: Countdown, period: Duration) -> CountdownHandle {
    let (tx, rx) = watch::channel(start);

    let task = tokio::spawn(async move {
        let mut remaining = start;
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately.
        ticker.tick().await;

        while !remaining.is_expired() {
            ticker.tick().await;
            remaining.tick();
            debug!(remaining = %remaining, "Countdown tick");
            if tx.send(remaining).is_err() {
                return;
            }
        }
        info!("Deal countdown expired");
    });

    CountdownHandle { task, rx }
}
