use std::f32::consts::PI;

/// The angular span (in degrees) a slider's track covers, measured
/// clockwise from north.
///
/// `360.0` degrees is a full circle with no gap; anything less leaves an
/// "open arc" between the end of the track and north through which
/// handles may not travel.
///
/// Values outside `[0.0, 360.0]` are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sweep {
    degrees: f32,
}

impl Default for Sweep {
    fn default() -> Self {
        Self::FULL
    }
}

impl Sweep {
    /// A full 360-degree circle.
    pub const FULL: Sweep = Sweep { degrees: 360.0 };

    /// Creates a sweep of the given span in degrees.
    ///
    /// Values greater than `360.0` are clamped to `360.0` and values less
    /// than `0.0` are clamped to `0.0`, with a warning.
    pub fn new(degrees: f32) -> Self {
        if degrees > 360.0 {
            log::warn!("sweep of {degrees} degrees is out of range, clamping to 360");
            return Self { degrees: 360.0 };
        }
        if degrees < 0.0 {
            log::warn!("sweep of {degrees} degrees is out of range, clamping to 0");
            return Self { degrees: 0.0 };
        }
        Self { degrees }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Whether the track wraps all the way around with no open arc.
    pub fn is_full(&self) -> bool {
        self.degrees == 360.0
    }

    /// Normalizes an angle assignment into the track's span.
    ///
    /// Negative angles floor at `0.0`; the remainder is taken against
    /// `degrees + 1`, not `degrees`, so an angle of exactly `degrees`
    /// survives normalization. The one-degree discontinuity this leaves
    /// at the wrap point is a long-standing quirk that downstream users
    /// depend on, so it stays.
    pub fn normalize(&self, angle: f32) -> f32 {
        angle.max(0.0) % (self.degrees + 1.0)
    }

    /// Resolves an angle that overshot the track into the open arc.
    ///
    /// Angles past the midpoint of the open arc clamp back to the start
    /// of the track, the rest clamp to its end. Angles within the track
    /// pass through unchanged.
    pub fn resolve_overshoot(&self, angle: f32) -> f32 {
        if angle > self.degrees {
            if angle > self.degrees + (360.0 - self.degrees) / 2.0 {
                0.0
            } else {
                self.degrees
            }
        } else {
            angle
        }
    }

    /// Half the circumference of the active arc on a circle of `radius`,
    /// which is the largest meaningful separation between two handles.
    pub fn half_arc_length(&self, radius: f32) -> f32 {
        PI * radius * self.degrees / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn out_of_range_spans_clamp() {
        assert_eq!(Sweep::new(400.0).degrees(), 360.0);
        assert_eq!(Sweep::new(-45.0).degrees(), 0.0);
        assert_eq!(Sweep::new(180.0).degrees(), 180.0);
    }

    #[test]
    fn full_circle_detection() {
        assert!(Sweep::FULL.is_full());
        assert!(!Sweep::new(359.0).is_full());
    }

    #[test]
    fn normalize_floors_negatives_and_wraps() {
        let sweep = Sweep::FULL;
        assert_eq!(sweep.normalize(-10.0), 0.0);
        assert_eq!(sweep.normalize(180.0), 180.0);
        // The modulus is span + 1, so 360 survives on a full circle...
        assert_eq!(sweep.normalize(360.0), 360.0);
        // ...and wrapping starts past it.
        assert_eq!(sweep.normalize(361.0), 0.0);

        let half = Sweep::new(180.0);
        assert_eq!(half.normalize(180.0), 180.0);
        assert_relative_eq!(half.normalize(200.0), 19.0, epsilon = 1e-4);
    }

    #[test]
    fn overshoot_resolves_to_nearest_track_end() {
        let sweep = Sweep::new(180.0);
        // Open arc spans (180, 360); its midpoint is 270.
        assert_eq!(sweep.resolve_overshoot(200.0), 180.0);
        assert_eq!(sweep.resolve_overshoot(300.0), 0.0);
        assert_eq!(sweep.resolve_overshoot(90.0), 90.0);
    }

    #[test]
    fn half_arc_length_of_half_circle() {
        let sweep = Sweep::new(180.0);
        assert_relative_eq!(
            sweep.half_arc_length(100.0),
            PI * 100.0 * 0.5,
            epsilon = 1e-3
        );
    }
}
