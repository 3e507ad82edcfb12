//! Single-slot notification with a deadline.
//!
//! At most one alert exists. Showing a new one replaces the pending alert
//! and restarts its timer. The event loop calls [`Notifier::expire`] on every
//! tick, which is what makes alerts disappear on their own.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

#[derive(Debug)]
pub struct Notifier {
    slot: Option<(Alert, Instant)>,
    timeout: Duration,
}

impl Notifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slot: None,
            timeout,
        }
    }

    /// Replace the current alert. An empty message just clears the slot.
    pub fn show(&mut self, message: impl Into<String>, kind: AlertKind, now: Instant) {
        let message = message.into();
        if message.is_empty() {
            self.slot = None;
            return;
        }
        self.slot = Some((Alert { message, kind }, now + self.timeout));
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, AlertKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, AlertKind::Error, now);
    }

    pub fn current(&self) -> Option<&Alert> {
        self.slot.as_ref().map(|(alert, _)| alert)
    }

    pub fn is_showing(&self) -> bool {
        self.slot.is_some()
    }

    /// Time left before the alert clears itself.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.slot
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Fraction of the timeout still left, in `0.0..=1.0`.
    pub fn remaining_ratio(&self, now: Instant) -> f64 {
        match self.remaining(now) {
            Some(left) if !self.timeout.is_zero() => {
                (left.as_secs_f64() / self.timeout.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Clear the alert if its deadline has passed. Returns true when it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.slot {
            Some((_, deadline)) if now >= deadline => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    /// Manual close. Returns true when an alert was showing.
    pub fn dismiss(&mut self) -> bool {
        self.slot.take().is_some()
    }
}
