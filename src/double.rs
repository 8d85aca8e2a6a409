use smallvec::SmallVec;

use arcdial_core::math::{self, Point, Size};
use arcdial_core::{Sweep, ValueRange};

use crate::event::{DualSliderEvent, HandleId};
use crate::handle::{Handle, HandleShape};
use crate::slider::CircularSlider;

/// A circular slider with two handles sharing one track.
///
/// Built by composition over [`CircularSlider`], which keeps owning the
/// first handle and all shared geometry. On top of the single-handle
/// behavior this layer adds:
///
/// - touch disambiguation when both handles' hit regions overlap,
/// - an open-arc guard on partial sweeps (the first handle never passes
///   the second, the second never leaves the track),
/// - a minimum arc-length separation between the handles.
///
/// A move that violates a guard is silently rejected: no value change,
/// no event, no redraw. Snap-to-marks does not apply in dual mode, and
/// neither does whole-slider dragging; only the handles themselves are
/// draggable.
#[derive(Debug)]
pub struct DoubleCircularSlider {
    base: CircularSlider,
    second: Handle,
    minimum_handles_distance: f32,
    events: SmallVec<[DualSliderEvent; 4]>,
}

impl DoubleCircularSlider {
    pub fn new(bounds: Size) -> Self {
        let base = CircularSlider::new(bounds);
        let second = Handle::new(base.sweep.normalize(60.0));
        Self {
            base,
            second,
            minimum_handles_distance: 10.0,
            events: SmallVec::new(),
        }
    }

    // --- configuration ---------------------------------------------------

    pub fn range(&self) -> ValueRange {
        self.base.range
    }

    pub fn set_range(&mut self, range: ValueRange) {
        self.base.set_range(range);
    }

    pub fn sweep(&self) -> Sweep {
        self.base.sweep
    }

    /// Changes the track's angular span, re-normalizing both handles and
    /// announcing the re-derived values as a non-user change.
    pub fn set_sweep(&mut self, sweep: Sweep) {
        self.base.sweep = sweep;
        self.base.handle.angle = sweep.normalize(self.base.handle.angle);
        self.second.angle = sweep.normalize(self.second.angle);
        self.notify_values(None, false);
        self.base.request_redraw();
    }

    pub fn bounds(&self) -> Size {
        self.base.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.base.set_bounds(bounds);
    }

    pub fn line_width(&self) -> f32 {
        self.base.line_width
    }

    pub fn set_line_width(&mut self, line_width: f32) {
        self.base.set_line_width(line_width);
    }

    pub fn set_radius(&mut self, radius: Option<f32>) {
        self.base.set_radius(radius);
    }

    pub fn set_first_handle_shape(&mut self, shape: HandleShape) {
        self.base.set_handle_shape(shape);
    }

    pub fn set_second_handle_shape(&mut self, shape: HandleShape) {
        self.second.shape = shape;
        self.base.request_redraw();
    }

    pub fn first_handle(&self) -> &Handle {
        &self.base.handle
    }

    pub fn second_handle(&self) -> &Handle {
        &self.second
    }

    pub fn minimum_handles_distance(&self) -> f32 {
        self.minimum_handles_distance
    }

    /// Sets the smallest arc length the two handles may be apart.
    ///
    /// Values are clamped into `[1, half the active arc's length]` with a
    /// warning, since anything larger could never be satisfied by two
    /// handles on the same track.
    pub fn set_minimum_handles_distance(&mut self, distance: f32) {
        let max_distance = self
            .base
            .sweep
            .half_arc_length(self.base.calculated_radius());

        if distance < 1.0 {
            log::warn!("minimum handles distance {distance} is out of range, clamping to 1");
            self.minimum_handles_distance = 1.0;
        } else if distance > max_distance {
            log::warn!(
                "minimum handles distance {distance} is out of range, clamping to {max_distance}"
            );
            self.minimum_handles_distance = max_distance;
        } else {
            self.minimum_handles_distance = distance;
        }
    }

    // --- values ------------------------------------------------------------

    pub fn first_value(&self) -> f32 {
        self.base.value()
    }

    pub fn second_value(&self) -> f32 {
        self.base
            .range
            .value_from_angle(self.second.angle, self.base.sweep)
    }

    /// Assigns the first handle's value programmatically, clamped into
    /// the range. Programmatic assignment bypasses the drag guards.
    pub fn set_first_value(&mut self, value: f32) {
        let value = self.base.range.clamp(value);
        self.base.handle.angle = self
            .base
            .sweep
            .normalize(self.base.range.angle_from_value(value, self.base.sweep));
        self.notify_values(None, false);
        self.base.request_redraw();
    }

    /// Assigns the second handle's value programmatically, clamped into
    /// the range. Programmatic assignment bypasses the drag guards.
    pub fn set_second_value(&mut self, value: f32) {
        let value = self.base.range.clamp(value);
        self.second.angle = self
            .base
            .sweep
            .normalize(self.base.range.angle_from_value(value, self.base.sweep));
        self.notify_values(None, false);
        self.base.request_redraw();
    }

    // --- geometry ----------------------------------------------------------

    pub fn center(&self) -> Point {
        self.base.center()
    }

    pub fn calculated_radius(&self) -> f32 {
        self.base.calculated_radius()
    }

    pub fn first_handle_center(&self) -> Point {
        self.base.handle_center()
    }

    pub fn second_handle_center(&self) -> Point {
        math::point_on_circle(
            self.base.center(),
            self.base.calculated_radius(),
            self.second.angle,
        )
    }

    pub fn intrinsic_size(&self) -> Size {
        self.base.intrinsic_size()
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.base.rotation_degrees()
    }

    // --- touch lifecycle ---------------------------------------------------

    pub fn is_tracking(&self) -> bool {
        self.base.tracking
    }

    /// Feeds a touch-down. Returns whether the touch landed on a handle.
    /// When both hit regions contain the point, the handle whose center
    /// is closer to the touch wins and the other is released.
    pub fn touch_down(&mut self, point: Point) -> bool {
        let first_center = self.base.handle_center();
        let second_center = self.second_handle_center();
        let line_width = self.base.line_width;

        if self
            .base
            .handle
            .hit_region_contains(point, first_center, line_width)
        {
            self.base.handle.is_pressed = true;
        }
        if self
            .second
            .hit_region_contains(point, second_center, line_width)
        {
            self.second.is_pressed = true;
        }

        if self.base.handle.is_pressed && self.second.is_pressed {
            if math::distance(first_center, point) < math::distance(second_center, point) {
                self.second.is_pressed = false;
            } else {
                self.base.handle.is_pressed = false;
            }
        }

        if self.base.handle.is_pressed || self.second.is_pressed {
            self.base.tracking = true;
            self.events.push(DualSliderEvent::TrackingStarted {
                first: self.first_value(),
                second: self.second_value(),
                handle: self.pressed_handle(),
            });
            self.base.request_redraw();
            return true;
        }
        false
    }

    /// Feeds a touch-move while tracking. Moves that violate a guard are
    /// silently dropped.
    pub fn touch_move(&mut self, point: Point) {
        if !self.base.tracking {
            return;
        }
        let Some(degrees) = math::angle_between(self.base.center(), point) else {
            return;
        };
        let new_angle = degrees.floor();

        let moved = if self.base.handle.is_pressed {
            self.try_move_first(new_angle).then_some(HandleId::First)
        } else if self.second.is_pressed {
            self.try_move_second(new_angle).then_some(HandleId::Second)
        } else {
            None
        };

        if moved.is_some() {
            self.notify_values(moved, true);
        }
    }

    /// Feeds a touch-up. Unlike the single-handle slider, release never
    /// snaps in dual mode.
    pub fn touch_up(&mut self) {
        if !self.base.tracking {
            return;
        }
        self.events.push(DualSliderEvent::TrackingEnded {
            first: self.first_value(),
            second: self.second_value(),
            handle: self.pressed_handle(),
        });

        self.base.handle.is_pressed = false;
        self.second.is_pressed = false;
        self.base.tracking = false;
        self.base.request_redraw();
    }

    /// A cancelled touch behaves exactly like a touch-up.
    pub fn touch_cancel(&mut self) {
        self.touch_up();
    }

    // --- constrained movement ------------------------------------------------

    fn try_move_first(&mut self, new_angle: f32) -> bool {
        if !self.base.sweep.is_full() && new_angle > self.second.angle {
            // Would cross past the other handle into the open arc.
            return false;
        }
        if self.separation_too_small(new_angle, self.second_handle_center()) {
            return false;
        }

        self.base.handle.angle = self.base.sweep.normalize(new_angle);
        self.base.request_redraw();
        true
    }

    fn try_move_second(&mut self, new_angle: f32) -> bool {
        if !self.base.sweep.is_full()
            && (new_angle > self.base.sweep.degrees() || new_angle < self.base.handle.angle)
        {
            return false;
        }
        if self.separation_too_small(new_angle, self.base.handle_center()) {
            return false;
        }

        self.second.angle = self.base.sweep.normalize(new_angle);
        self.base.request_redraw();
        true
    }

    fn separation_too_small(&self, new_angle: f32, other_center: Point) -> bool {
        let radius = self.base.calculated_radius();
        let prospective = math::point_on_circle(self.base.center(), radius, new_angle);
        let arc = math::arc_length_between(prospective, other_center, radius);
        arc < self.minimum_handles_distance + self.second.diameter(self.base.line_width)
    }

    fn pressed_handle(&self) -> HandleId {
        if self.base.handle.is_pressed {
            HandleId::First
        } else {
            HandleId::Second
        }
    }

    fn notify_values(&mut self, handle: Option<HandleId>, from_user: bool) {
        self.events.push(DualSliderEvent::ValuesChanged {
            first: self.first_value(),
            second: self.second_value(),
            handle,
            from_user,
        });
    }

    // --- host notifications ------------------------------------------------

    /// Drains the queued events in the order they occurred.
    pub fn take_events(&mut self) -> SmallVec<[DualSliderEvent; 4]> {
        std::mem::take(&mut self.events)
    }

    /// Returns whether geometric state changed since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        self.base.take_redraw_request()
    }
}
