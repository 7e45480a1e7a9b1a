use std::fmt;

use crate::models::temperature::format_tenths;

/// Running statistics for one station, in integer tenths of a degree.
///
/// `sum` is wide enough to absorb a full file of extreme readings
/// (billions of rows at +/-99.9 stay far inside i64 range). Identity lives
/// in the map key, so two values with the same name but different counters
/// are still distinct values here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationStats {
    pub count: u64,
    pub sum: i64,
    pub min: i32,
    pub max: i32,
}

impl StationStats {
    /// Statistics seeded from a first reading.
    pub fn new(tenths: i32) -> Self {
        Self {
            count: 1,
            sum: i64::from(tenths),
            min: tenths,
            max: tenths,
        }
    }

    /// Fold one reading into the running statistics.
    pub fn record(&mut self, tenths: i32) {
        self.min = self.min.min(tenths);
        self.max = self.max.max(tenths);
        self.sum += i64::from(tenths);
        self.count += 1;
    }

    /// Combine the statistics of another partial aggregate for the same
    /// station. Commutative and associative, so merge order never matters.
    pub fn merge(&mut self, other: &StationStats) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// Arithmetic mean in tenths, rounded to nearest with ties away from zero.
    pub fn mean_tenths(&self) -> i32 {
        (self.sum as f64 / self.count as f64).round() as i32
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            format_tenths(self.min),
            format_tenths(self.mean_tenths()),
            format_tenths(self.max)
        )
    }
}
