use crate::sweep::Sweep;

/// The value range `[min, max]` a slider maps its track onto.
///
/// The default range is `0.0` to `100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl ValueRange {
    /// # Panics
    ///
    /// This will panic if `min >= max`.
    pub fn new(min: f32, max: f32) -> Self {
        assert!(min < max, "value range requires min < max");
        Self { min, max }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamps a value into `[min, max]`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// The value a track angle maps to.
    ///
    /// Returns `0.0` for a zero-degree sweep rather than dividing by it.
    pub fn value_from_angle(&self, angle: f32, sweep: Sweep) -> f32 {
        if sweep.degrees() == 0.0 {
            return 0.0;
        }
        self.span() * angle / sweep.degrees()
    }

    /// The track angle a value maps to. Inverse of [`value_from_angle`]
    /// for any non-zero sweep.
    ///
    /// [`value_from_angle`]: Self::value_from_angle
    pub fn angle_from_value(&self, value: f32, sweep: Sweep) -> f32 {
        value * sweep.degrees() / self.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions_are_inverses() {
        let range = ValueRange::new(0.0, 100.0);
        let sweep = Sweep::new(300.0);

        for deg in 0..=300 {
            let deg = deg as f32;
            let value = range.value_from_angle(deg, sweep);
            assert_relative_eq!(
                range.angle_from_value(value, sweep),
                deg,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn half_turn_of_the_default_range() {
        let range = ValueRange::default();
        assert_relative_eq!(
            range.value_from_angle(180.0, Sweep::FULL),
            50.0,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            range.angle_from_value(75.0, Sweep::FULL),
            270.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn zero_sweep_yields_zero_not_nan() {
        let range = ValueRange::default();
        assert_eq!(range.value_from_angle(10.0, Sweep::new(0.0)), 0.0);
    }

    #[test]
    fn clamp_hits_the_bounds_exactly() {
        let range = ValueRange::new(-5.0, 5.0);
        assert_eq!(range.clamp(7.0), 5.0);
        assert_eq!(range.clamp(-7.0), -5.0);
        assert_eq!(range.clamp(1.5), 1.5);
    }

    #[test]
    #[should_panic]
    fn reversed_range_panics() {
        let _ = ValueRange::new(10.0, 0.0);
    }
}
