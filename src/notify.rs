//! Notification layer: severity tiers over a status snapshot, an injectable
//! notifier sink, and the periodic re-check scheduler.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

use crate::models::status::ParkingStatus;

/// Interval between background status re-checks.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// How urgent the current due time is, for UI highlighting and notification
/// tiering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Due more than 24 hours away.
    Normal,
    /// Due within 24 hours.
    Reminder,
    /// Due within 2 hours.
    Urgent,
    /// Exactly at the due boundary; not yet overdue.
    DueNow,
    /// Due time strictly in the past.
    Overdue,
}

impl Severity {
    /// Classify a (possibly negative) hours-until-due value.
    pub fn from_hours_until_due(hours: i64) -> Self {
        if hours < 0 {
            Severity::Overdue
        } else if hours == 0 {
            Severity::DueNow
        } else if hours <= 2 {
            Severity::Urgent
        } else if hours <= 24 {
            Severity::Reminder
        } else {
            Severity::Normal
        }
    }

    /// Severity of a snapshot, or `None` when nothing is parked.
    pub fn of(status: &ParkingStatus) -> Option<Self> {
        if !status.is_currently_parked || status.next_payment_due.is_none() {
            return None;
        }
        Some(Self::from_hours_until_due(status.hours_until_due))
    }
}

/// Sink for due-time notifications. Implementations decide how to surface
/// them (system notification, console, test spy).
pub trait Notifier: Send {
    fn notify(&self, severity: Severity, status: &ParkingStatus);
}

/// Evaluate a snapshot and emit at most one notification. Only the reminder,
/// urgent, and overdue tiers are pushed to the user; due-now and normal are
/// classification-only.
pub fn check_and_notify(status: &ParkingStatus, notifier: &dyn Notifier) {
    match Severity::of(status) {
        Some(sev @ (Severity::Overdue | Severity::Urgent | Severity::Reminder)) => {
            notifier.notify(sev, status);
        }
        _ => {}
    }
}

/// Periodic re-check against the latest state, on a background thread.
///
/// The status closure is a read-only view; checks run immediately on start
/// and then once per interval. Stopping (or dropping) the scheduler cancels
/// the timer and joins the worker.
pub struct NotificationScheduler {
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl NotificationScheduler {
    pub fn start<F, N>(interval: Duration, status_fn: F, notifier: N) -> Self
    where
        F: Fn() -> ParkingStatus + Send + 'static,
        N: Notifier + 'static,
    {
        let (stop, ticks) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                check_and_notify(&status_fn(), &notifier);
                match ticks.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // Stop requested, or the scheduler handle went away.
                    _ => break,
                }
            }
            debug!("notification scheduler stopped");
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Cancel the periodic re-check and wait for the worker to exit.
    pub fn stop(&mut self) {
        let _ = self.stop.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for NotificationScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
