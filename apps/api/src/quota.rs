//! Daily image-generation quota.
//!
//! Process-lifetime only: the counter lives in memory and restarts at zero
//! with the service. The window rolls over at the UTC date change.

use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("daily generation quota exceeded ({current}/{max})")]
pub struct QuotaExceeded {
    pub current: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    pub current_count: u32,
    pub max_quota: u32,
    pub remaining: u32,
    /// UTC date of the current counting window.
    pub reset_date: NaiveDate,
}

struct Window {
    count: u32,
    day: NaiveDate,
}

pub struct QuotaTracker {
    max: u32,
    window: Mutex<Window>,
}

impl QuotaTracker {
    pub fn new(max: u32) -> Self {
        Self::starting_on(max, Utc::now().date_naive())
    }

    fn starting_on(max: u32, day: NaiveDate) -> Self {
        Self {
            max,
            window: Mutex::new(Window { count: 0, day }),
        }
    }

    /// Counts one generation, or fails without counting when the limit is hit.
    pub fn try_consume(&self) -> Result<QuotaStatus, QuotaExceeded> {
        self.try_consume_on(Utc::now().date_naive())
    }

    pub fn status(&self) -> QuotaStatus {
        self.status_on(Utc::now().date_naive())
    }

    fn try_consume_on(&self, today: NaiveDate) -> Result<QuotaStatus, QuotaExceeded> {
        let mut window = self.lock();
        roll_over(&mut window, today);

        if window.count >= self.max {
            warn!("Quota exceeded: {}/{}", window.count, self.max);
            return Err(QuotaExceeded {
                current: window.count,
                max: self.max,
            });
        }

        window.count += 1;
        info!(
            "Generation {}/{} (date: {})",
            window.count, self.max, window.day
        );
        Ok(self.snapshot(&window))
    }

    fn status_on(&self, today: NaiveDate) -> QuotaStatus {
        let mut window = self.lock();
        roll_over(&mut window, today);
        self.snapshot(&window)
    }

    fn snapshot(&self, window: &Window) -> QuotaStatus {
        QuotaStatus {
            current_count: window.count,
            max_quota: self.max,
            remaining: self.max.saturating_sub(window.count),
            reset_date: window.day,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Window> {
        // The guarded data is two plain integers; a panic mid-update cannot
        // leave it torn, so a poisoned lock is still usable.
        self.window.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn roll_over(window: &mut Window, today: NaiveDate) {
    if today > window.day {
        info!(
            "Quota reset: {} generations on {}",
            window.count, window.day
        );
        window.count = 0;
        window.day = today;
    }
}
