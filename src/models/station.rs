use crate::models::ScaledTemperature;

/// Running statistics for one station.
///
/// `count` starts at 1 on the first observation and only grows, so the mean
/// is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationStats {
    pub min: ScaledTemperature,
    pub max: ScaledTemperature,
    pub sum: i64,
    pub count: u64,
}

impl StationStats {
    pub fn new(temperature: ScaledTemperature) -> Self {
        Self {
            min: temperature,
            max: temperature,
            sum: temperature.tenths(),
            count: 1,
        }
    }

    #[inline]
    pub fn record(&mut self, temperature: ScaledTemperature) {
        self.min = self.min.min(temperature);
        self.max = self.max.max(temperature);
        self.sum += temperature.tenths();
        self.count += 1;
    }

    pub fn merge(&mut self, other: &StationStats) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn mean(&self) -> ScaledTemperature {
        ScaledTemperature::mean(self.sum, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(tenths: i64) -> ScaledTemperature {
        ScaledTemperature::new(tenths)
    }

    #[test]
    fn test_record_updates_bounds() {
        let mut stats = StationStats::new(t(123));
        stats.record(t(100));
        stats.record(t(-50));

        assert_eq!(stats.min, t(-50));
        assert_eq!(stats.max, t(123));
        assert_eq!(stats.sum, 173);
        assert_eq!(stats.count, 3);
        assert!(stats.min <= stats.mean() && stats.mean() <= stats.max);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = StationStats::new(t(10));
        a.record(t(-40));
        let b = StationStats::new(t(75));
        let c = StationStats::new(t(3));

        let mut left = a;
        left.merge(&b);
        left.merge(&c);

        let mut right = c;
        right.merge(&a);
        right.merge(&b);

        assert_eq!(left, right);
        assert_eq!(left.count, 4);
        assert_eq!(left.sum, 48);
    }

    #[test]
    fn test_mean_stays_within_bounds() {
        let mut stats = StationStats::new(t(-999));
        for tenths in [-1, 999, 0, -500, 42] {
            stats.record(t(tenths));
            let mean = stats.mean();
            assert!(stats.min <= mean && mean <= stats.max);
        }
    }
}
