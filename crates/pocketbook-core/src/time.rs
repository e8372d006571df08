use chrono::NaiveDate;

/// Clock abstracts access to the current date so services remain deterministic in tests.
pub trait Clock {
    /// Returns the date used when a record is stamped with "today".
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
