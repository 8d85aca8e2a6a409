use rgb::RGBA;

use crate::error::SliderError;

/// A color for the filled portion of the track, as linear RGBA floats.
pub type TrackColor = RGBA<f32>;

/// A gradient of evenly spaced colors along the track.
///
/// The slider itself is color-agnostic; hosts sample the track at the
/// handle's position on every redraw:
///
/// ```
/// use arcdial::{CircularSlider, ColorTrack};
/// use arcdial::math::Size;
///
/// let mut slider = CircularSlider::new(Size::new(200.0, 200.0));
/// let track = ColorTrack::default();
///
/// slider.set_value(25.0);
/// let fill = track.color_at(slider.fraction());
/// # let _ = fill;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTrack {
    colors: Vec<TrackColor>,
}

impl Default for ColorTrack {
    fn default() -> Self {
        Self {
            colors: vec![
                TrackColor::new(0.667, 0.667, 0.667, 1.0),
                TrackColor::new(0.0, 0.0, 1.0, 1.0),
                TrackColor::new(0.333, 0.333, 0.333, 1.0),
            ],
        }
    }
}

impl ColorTrack {
    /// Creates a track from the given color stops. A gradient needs at
    /// least two colors; fewer fall back to the default list with a
    /// warning.
    pub fn new(colors: Vec<TrackColor>) -> Self {
        if colors.len() < 2 {
            log::warn!(
                "a gradient track needs at least 2 colors, got {}; using the default colors",
                colors.len()
            );
            return Self::default();
        }
        Self { colors }
    }

    pub fn colors(&self) -> &[TrackColor] {
        &self.colors
    }

    pub fn add_color(&mut self, color: TrackColor) {
        self.colors.push(color);
    }

    pub fn change_color(&mut self, index: usize, color: TrackColor) -> Result<(), SliderError> {
        let count = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(SliderError::ColorIndexOutOfBounds { index, count })?;
        *slot = color;
        Ok(())
    }

    /// Removes a color stop. Fails if the track would be left with fewer
    /// than two colors.
    pub fn remove_color(&mut self, index: usize) -> Result<TrackColor, SliderError> {
        if index >= self.colors.len() {
            return Err(SliderError::ColorIndexOutOfBounds {
                index,
                count: self.colors.len(),
            });
        }
        if self.colors.len() <= 2 {
            return Err(SliderError::GradientTooSmall);
        }
        Ok(self.colors.remove(index))
    }

    /// The blended color at `fraction` of the way along the track, with
    /// the stops spaced evenly. The fraction is clamped into `[0, 1]`.
    pub fn color_at(&self, fraction: f32) -> TrackColor {
        let fraction = fraction.clamp(0.0, 1.0);
        let scaled = fraction * (self.colors.len() - 1) as f32;

        // Index of the stop pair bracketing the fraction; the upper end
        // of the last pair covers fraction == 1.0 exactly.
        let index = (scaled.floor() as usize).min(self.colors.len() - 2);
        let t = scaled - index as f32;

        blend(self.colors[index], self.colors[index + 1], t)
    }
}

fn blend(from: TrackColor, to: TrackColor, t: f32) -> TrackColor {
    TrackColor::new(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_the_first_and_last_colors() {
        let track = ColorTrack::new(vec![
            TrackColor::new(1.0, 0.0, 0.0, 1.0),
            TrackColor::new(0.0, 1.0, 0.0, 1.0),
            TrackColor::new(0.0, 0.0, 1.0, 1.0),
        ]);

        assert_eq!(track.color_at(0.0), track.colors()[0]);
        assert_eq!(track.color_at(1.0), track.colors()[2]);
    }

    #[test]
    fn midpoint_of_two_colors_is_the_average() {
        let track = ColorTrack::new(vec![
            TrackColor::new(0.0, 0.0, 0.0, 0.0),
            TrackColor::new(1.0, 1.0, 1.0, 1.0),
        ]);

        let mid = track.color_at(0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.g, 0.5);
        assert_relative_eq!(mid.b, 0.5);
        assert_relative_eq!(mid.a, 0.5);
    }

    #[test]
    fn fractions_outside_the_track_clamp() {
        let track = ColorTrack::default();
        assert_eq!(track.color_at(-1.0), track.color_at(0.0));
        assert_eq!(track.color_at(2.0), track.color_at(1.0));
    }

    #[test]
    fn three_stops_blend_within_the_right_pair() {
        let track = ColorTrack::new(vec![
            TrackColor::new(1.0, 0.0, 0.0, 1.0),
            TrackColor::new(0.0, 1.0, 0.0, 1.0),
            TrackColor::new(0.0, 0.0, 1.0, 1.0),
        ]);

        // A quarter along sits halfway between the first two stops.
        let c = track.color_at(0.25);
        assert_relative_eq!(c.r, 0.5);
        assert_relative_eq!(c.g, 0.5);
        assert_relative_eq!(c.b, 0.0);
    }

    #[test]
    fn edits_are_index_checked() {
        let mut track = ColorTrack::default();
        assert!(track.change_color(0, TrackColor::new(1.0, 1.0, 0.0, 1.0)).is_ok());
        assert_eq!(
            track.change_color(9, TrackColor::new(1.0, 1.0, 0.0, 1.0)),
            Err(SliderError::ColorIndexOutOfBounds { index: 9, count: 3 })
        );

        assert!(track.remove_color(0).is_ok());
        assert_eq!(track.remove_color(0), Err(SliderError::GradientTooSmall));
        assert_eq!(
            track.remove_color(7),
            Err(SliderError::ColorIndexOutOfBounds { index: 7, count: 2 })
        );
    }

    #[test]
    fn too_few_colors_fall_back_to_the_default() {
        let track = ColorTrack::new(vec![TrackColor::new(1.0, 0.0, 0.0, 1.0)]);
        assert_eq!(track, ColorTrack::default());
    }
}
