/// Counts of what a [`Decoder`](crate::Decoder) did with incoming events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    decoded: u64,
    skipped: u64,
    failed: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_decoded(&mut self) {
        self.decoded += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_failed(&mut self) {
        self.failed += 1;
    }

    pub fn decoded(&self) -> u64 {
        self.decoded
    }

    /// Events of an unknown type that were dropped.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn total(&self) -> u64 {
        self.decoded + self.skipped + self.failed
    }
}
