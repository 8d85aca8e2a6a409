use smallvec::SmallVec;

use arcdial_core::math::{self, Point, Size};
use arcdial_core::{Sweep, ValueRange};

use crate::event::SliderEvent;
use crate::handle::{Handle, HandleShape};
use crate::marks::{self, Marks};

/// A circular slider with a single draggable handle.
///
/// The slider owns no rendering. Hosts feed it touch lifecycle events and
/// property assignments, then drain [`take_events`] and
/// [`take_redraw_request`] to react. All geometry is in the host's own
/// coordinate space, set through `bounds`.
///
/// [`take_events`]: Self::take_events
/// [`take_redraw_request`]: Self::take_redraw_request
#[derive(Debug)]
pub struct CircularSlider {
    pub(crate) range: ValueRange,
    pub(crate) sweep: Sweep,
    pub(crate) bounds: Size,
    pub(crate) radius: Option<f32>,
    pub(crate) line_width: f32,
    pub(crate) rotation_angle: Option<f32>,
    pub(crate) handle: Handle,
    pub(crate) marks: Marks,
    pub(crate) tracking: bool,
    pub(crate) events: SmallVec<[SliderEvent; 4]>,
    pub(crate) needs_redraw: bool,
}

impl CircularSlider {
    pub fn new(bounds: Size) -> Self {
        Self {
            range: ValueRange::default(),
            sweep: Sweep::FULL,
            bounds,
            radius: None,
            line_width: 5.0,
            rotation_angle: None,
            handle: Handle::new(0.0),
            marks: Marks::default(),
            tracking: false,
            events: SmallVec::new(),
            needs_redraw: true,
        }
    }

    // --- configuration ---------------------------------------------------

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn set_range(&mut self, range: ValueRange) {
        self.range = range;
        self.request_redraw();
    }

    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    /// Changes the track's angular span. The handle keeps its angle where
    /// possible (re-normalized into the new span), and the re-derived
    /// value is announced as a non-user change.
    pub fn set_sweep(&mut self, sweep: Sweep) {
        self.sweep = sweep;
        self.handle.angle = sweep.normalize(self.handle.angle);
        self.assign_value(self.value(), false);
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.request_redraw();
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f32) {
        self.line_width = line_width;
        self.request_redraw();
    }

    /// Overrides the auto-computed radius, or clears the override with
    /// `None`.
    pub fn set_radius(&mut self, radius: Option<f32>) {
        self.radius = radius;
        self.request_redraw();
    }

    pub fn set_handle_shape(&mut self, shape: HandleShape) {
        self.handle.shape = shape;
        self.request_redraw();
    }

    pub fn set_handle_enlargement(&mut self, enlargement: f32) {
        self.handle.enlargement = enlargement;
        self.request_redraw();
    }

    /// Overrides the rotation reported by [`rotation_degrees`] for
    /// partial sweeps.
    ///
    /// [`rotation_degrees`]: Self::rotation_degrees
    pub fn set_rotation_angle(&mut self, degrees: Option<f32>) {
        self.rotation_angle = degrees;
        self.request_redraw();
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn marks_mut(&mut self) -> &mut Marks {
        self.request_redraw();
        &mut self.marks
    }

    // --- value -----------------------------------------------------------

    pub fn value(&self) -> f32 {
        self.range.value_from_angle(self.handle.angle, self.sweep)
    }

    /// Assigns the value programmatically, clamping it into the range
    /// exactly. Announced as a non-user change.
    pub fn set_value(&mut self, value: f32) {
        self.assign_value(value, false);
    }

    pub fn angle(&self) -> f32 {
        self.handle.angle
    }

    /// How far along the track the handle sits, in `[0.0, 1.0]`.
    pub fn fraction(&self) -> f32 {
        if self.sweep.degrees() == 0.0 {
            return 0.0;
        }
        self.handle.angle / self.sweep.degrees()
    }

    pub(crate) fn assign_value(&mut self, value: f32, from_user: bool) {
        let value = self.range.clamp(value);
        self.handle.angle = self
            .sweep
            .normalize(self.range.angle_from_value(value, self.sweep));
        self.events.push(SliderEvent::ValueChanged { value, from_user });
        self.request_redraw();
    }

    // --- geometry --------------------------------------------------------

    pub fn center(&self) -> Point {
        Point::new(self.bounds.width * 0.5, self.bounds.height * 0.5)
    }

    /// The explicit radius override, or one derived from the bounds that
    /// leaves room for the handle and the track stroke.
    pub fn calculated_radius(&self) -> f32 {
        if let Some(radius) = self.radius {
            return radius;
        }
        let minimum_side = self.bounds.width.min(self.bounds.height);
        let half_line = (self.line_width / 2.0).ceil();
        let half_handle = (self.handle.diameter(self.line_width) / 2.0).ceil();
        minimum_side * 0.5 - half_handle.max(half_line)
    }

    pub fn handle_center(&self) -> Point {
        math::point_on_circle(self.center(), self.calculated_radius(), self.handle.angle)
    }

    /// The square size the control needs to show the whole track plus the
    /// handle overhang.
    pub fn intrinsic_size(&self) -> Size {
        let diameter = self.calculated_radius() * 2.0;
        let half_handle = (self.handle.diameter(self.line_width) / 2.0).ceil();
        let half_line = (self.line_width / 2.0).ceil();
        let total = diameter + 2.0 * half_handle.max(half_line);
        Size::new(total, total)
    }

    /// The rotation (in degrees) a renderer should apply so a partial
    /// track sits symmetrically about north. Zero on a full circle.
    pub fn rotation_degrees(&self) -> f32 {
        if self.sweep.is_full() {
            return 0.0;
        }
        self.rotation_angle
            .unwrap_or(-(self.sweep.degrees() / 2.0))
    }

    pub(crate) fn point_inside_circle(&self, point: Point) -> bool {
        math::distance(self.center(), point) < self.calculated_radius() + self.line_width * 0.5
    }

    // --- touch lifecycle ---------------------------------------------------

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Feeds a touch-down. Returns whether the touch was consumed as a
    /// drag start: either on the handle itself, or anywhere on the dial's
    /// disc for whole-slider dragging.
    pub fn touch_down(&mut self, point: Point) -> bool {
        if self
            .handle
            .hit_region_contains(point, self.handle_center(), self.line_width)
        {
            self.handle.is_pressed = true;
            self.tracking = true;
            self.events.push(SliderEvent::TrackingStarted {
                value: self.value(),
            });
            self.request_redraw();
            return true;
        }

        if self.point_inside_circle(point) {
            self.tracking = true;
            return true;
        }
        false
    }

    /// Feeds a touch-move while tracking. Touches at the exact center
    /// have no direction and are ignored.
    pub fn touch_move(&mut self, point: Point) {
        if !self.tracking {
            return;
        }
        let Some(degrees) = math::angle_between(self.center(), point) else {
            return;
        };

        self.move_handle(degrees.floor());
        self.events.push(SliderEvent::ValueChanged {
            value: self.value(),
            from_user: true,
        });
    }

    /// Feeds a touch-up. Snap-to-marks runs after the `TrackingEnded`
    /// event, so the event carries the raw release value.
    pub fn touch_up(&mut self) {
        if !self.tracking {
            return;
        }
        self.events.push(SliderEvent::TrackingEnded {
            value: self.value(),
        });
        self.snap_handle();

        self.handle.is_pressed = false;
        self.tracking = false;
        self.request_redraw();
    }

    /// A cancelled touch behaves exactly like a touch-up so the handle
    /// can never be left stuck in the pressed state.
    pub fn touch_cancel(&mut self) {
        self.touch_up();
    }

    fn move_handle(&mut self, new_angle: f32) {
        self.handle.angle = self
            .sweep
            .normalize(self.sweep.resolve_overshoot(new_angle));
        self.request_redraw();
    }

    fn snap_handle(&mut self) {
        // The release angle measured back from the far end of the track,
        // computed once so a label snap does not feed into the marker
        // pass. Both passes run when both flags are set; markers win.
        let angle = self.handle.angle;
        let fixed = if angle < 0.0 {
            -angle
        } else {
            self.sweep.degrees() - angle
        };

        if self.marks.snap_to_labels {
            self.snap_to_nearest(self.marks.labels().len(), fixed);
        }
        if self.marks.snap_to_markers {
            self.snap_to_nearest(self.marks.marker_count(), fixed);
        }
    }

    fn snap_to_nearest(&mut self, count: usize, fixed: f32) {
        let Some(candidates) = marks::snap_candidates(count, self.sweep) else {
            return;
        };

        let mut min_dist = self.sweep.degrees();
        let mut new_angle = 0.0;
        for candidate in candidates {
            if (fixed - candidate).abs() < min_dist {
                min_dist = (fixed - candidate).abs();
                new_angle = if candidate != 0.0 || !self.sweep.is_full() {
                    self.sweep.degrees() - candidate
                } else {
                    0.0
                };
            }
        }

        let value = self.range.value_from_angle(new_angle, self.sweep);
        self.assign_value(value, false);
    }

    // --- host notifications ------------------------------------------------

    /// Drains the queued events in the order they occurred.
    pub fn take_events(&mut self) -> SmallVec<[SliderEvent; 4]> {
        std::mem::take(&mut self.events)
    }

    /// Returns whether geometric state changed since the last call.
    /// Multiple mutations coalesce into one request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(crate) fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}
