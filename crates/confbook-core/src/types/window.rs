//! Closed time windows and the overlap rule used for double-booking checks.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A closed `[start, end]` interval of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Inclusive end.
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window. No ordering check is done here.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Length of the window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Two windows overlap unless one ends strictly before the other starts.
    ///
    /// Windows that touch at an endpoint overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        !(other.end < self.start || other.start > self.end)
    }

    /// Whether the window has fully elapsed at `now`.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_disjoint_windows_do_not_overlap() {
        let morning = TimeWindow::new(at(9), at(11));
        let afternoon = TimeWindow::new(at(13), at(15));
        assert!(!morning.overlaps(&afternoon));
        assert!(!afternoon.overlaps(&morning));
    }

    #[test]
    fn test_touching_endpoints_overlap() {
        let first = TimeWindow::new(at(9), at(11));
        let second = TimeWindow::new(at(11), at(13));
        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = TimeWindow::new(at(8), at(18));
        let inner = TimeWindow::new(at(10), at(11));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_has_ended() {
        let window = TimeWindow::new(at(9), at(11));
        assert!(!window.has_ended(at(11)));
        assert!(window.has_ended(at(12)));
        assert_eq!(window.duration(), Duration::hours(2));
    }
}
