use arcdial_core::Sweep;

use crate::error::SliderError;

/// Evenly spaced label and marker collections along the track.
///
/// Labels carry host-defined strings; markers are anonymous tick marks.
/// Both exist here only as snap targets and layout positions. How they
/// are drawn is the host's business.
#[derive(Debug, Clone, Default)]
pub struct Marks {
    labels: Vec<String>,
    marker_count: usize,
    /// Snap the handle to the nearest label position on release.
    pub snap_to_labels: bool,
    /// Snap the handle to the nearest marker position on release. When
    /// both flags are set, markers win.
    pub snap_to_markers: bool,
}

impl Marks {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    pub fn set_marker_count(&mut self, count: usize) {
        self.marker_count = count;
    }

    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    pub fn change_label(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> Result<(), SliderError> {
        let count = self.labels.len();
        let slot = self
            .labels
            .get_mut(index)
            .ok_or(SliderError::LabelIndexOutOfBounds { index, count })?;
        *slot = label.into();
        Ok(())
    }

    pub fn remove_label(&mut self, index: usize) -> Result<String, SliderError> {
        if index >= self.labels.len() {
            return Err(SliderError::LabelIndexOutOfBounds {
                index,
                count: self.labels.len(),
            });
        }
        Ok(self.labels.remove(index))
    }
}

/// The compass angles of `count` evenly spaced marks along `sweep`.
///
/// On a full circle the marks divide the whole circumference (the wrap
/// point hosts only one mark); on a partial sweep the first and last
/// marks sit on the track's two ends.
pub fn mark_angles(count: usize, sweep: Sweep) -> impl Iterator<Item = f32> {
    // A lone mark on a partial sweep sits at the track start rather than
    // dividing by zero.
    let divisor = spacing_divisor(count, sweep).max(1);
    (0..count).map(move |i| i as f32 / divisor as f32 * sweep.degrees())
}

/// The candidate angles a released handle may snap to, or `None` when the
/// collection is too small to define any spacing.
///
/// The candidate list intentionally runs one step past the mark count so
/// that on a full circle the wrap point appears both as `0` and as the
/// full sweep.
pub(crate) fn snap_candidates(count: usize, sweep: Sweep) -> Option<impl Iterator<Item = f32>> {
    if count == 0 || (!sweep.is_full() && count < 2) {
        return None;
    }
    let divisor = spacing_divisor(count, sweep);
    Some((0..=count).map(move |i| i as f32 / divisor as f32 * sweep.degrees()))
}

fn spacing_divisor(count: usize, sweep: Sweep) -> usize {
    if sweep.is_full() {
        count
    } else {
        count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn label_edits_are_index_checked() {
        let mut marks = Marks::default();
        marks.add_label("lo");
        marks.add_label("hi");

        assert!(marks.change_label(1, "mid").is_ok());
        assert_eq!(
            marks.change_label(2, "oops"),
            Err(SliderError::LabelIndexOutOfBounds { index: 2, count: 2 })
        );

        assert_eq!(marks.remove_label(0).as_deref(), Ok("lo"));
        assert_eq!(
            marks.remove_label(5),
            Err(SliderError::LabelIndexOutOfBounds { index: 5, count: 1 })
        );
    }

    #[test]
    fn full_circle_marks_divide_the_whole_turn() {
        let angles: Vec<f32> = mark_angles(4, Sweep::FULL).collect();
        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn partial_sweep_marks_pin_both_ends() {
        let angles: Vec<f32> = mark_angles(3, Sweep::new(180.0)).collect();
        assert_eq!(angles.len(), 3);
        assert_relative_eq!(angles[0], 0.0);
        assert_relative_eq!(angles[1], 90.0);
        assert_relative_eq!(angles[2], 180.0);
    }

    #[test]
    fn snap_candidates_include_the_wrap_point_twice() {
        let candidates: Vec<f32> = snap_candidates(4, Sweep::FULL).unwrap().collect();
        assert_eq!(candidates, vec![0.0, 90.0, 180.0, 270.0, 360.0]);
    }

    #[test]
    fn degenerate_collections_offer_no_candidates() {
        assert!(snap_candidates(0, Sweep::FULL).is_none());
        assert!(snap_candidates(1, Sweep::new(180.0)).is_none());
        assert!(snap_candidates(1, Sweep::FULL).is_some());
    }
}
