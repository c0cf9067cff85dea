/// Open or closed range of ray parameters.
///
/// The nearest-hit resolver narrows an interval `(epsilon, best)` as it
/// finds closer surfaces; shadow queries start with `best` set to the
/// distance to the light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval [0, 1], used for color channel clamping.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.01, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.01));
        assert!(!interval.surrounds(10.0));
        assert!(!interval.surrounds(0.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(9.9));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.5), 0.5);
        assert_eq!(Interval::UNIT.clamp(15.0), 1.0);
    }

    #[test]
    fn test_with_max_keeps_lower_bound() {
        let narrowed = Interval::new(0.01, 1000.0).with_max(42.0);
        assert_eq!(narrowed.min, 0.01);
        assert_eq!(narrowed.max, 42.0);
    }
}
