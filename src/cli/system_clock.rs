use chrono::{Local, NaiveDate};

use pocketbook_core::Clock;

/// Real-time clock backed by the local time zone, matching what the user sees on their wall.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
