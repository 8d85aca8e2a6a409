use arcdial_core::math::Point;

/// The smallest square touch target a handle accepts, regardless of how
/// small it is drawn.
pub const MIN_TOUCH_TARGET: f32 = 44.0;

/// How large a handle is drawn (and hit-tested) relative to the track's
/// line width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleShape {
    /// Half the line width.
    SmallCircle,
    /// Exactly the line width.
    MediumCircle,
    /// The line width plus the enlargement.
    #[default]
    LargeCircle,
    /// A semitransparent large circle with a nested small circle. Same
    /// footprint as [`LargeCircle`].
    ///
    /// [`LargeCircle`]: Self::LargeCircle
    DoubleCircle,
}

impl HandleShape {
    pub fn diameter(&self, line_width: f32, enlargement: f32) -> f32 {
        match self {
            HandleShape::SmallCircle => line_width / 2.0,
            HandleShape::MediumCircle => line_width,
            HandleShape::LargeCircle | HandleShape::DoubleCircle => line_width + enlargement,
        }
    }
}

/// One draggable thumb on the track.
#[derive(Debug, Clone)]
pub struct Handle {
    pub(crate) angle: f32,
    pub(crate) shape: HandleShape,
    pub(crate) enlargement: f32,
    pub(crate) is_pressed: bool,
}

impl Default for Handle {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Handle {
    pub(crate) fn new(angle: f32) -> Self {
        Self {
            angle,
            shape: HandleShape::default(),
            enlargement: 10.0,
            is_pressed: false,
        }
    }

    /// The handle's compass angle along the track.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn shape(&self) -> HandleShape {
        self.shape
    }

    /// Whether a touch is currently holding this handle.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn diameter(&self, line_width: f32) -> f32 {
        self.shape.diameter(line_width, self.enlargement)
    }

    /// Whether `point` lands in this handle's touch target: a square of
    /// half-width `max(diameter, MIN_TOUCH_TARGET) / 2` around `center`.
    pub(crate) fn hit_region_contains(&self, point: Point, center: Point, line_width: f32) -> bool {
        let half = self.diameter(line_width).max(MIN_TOUCH_TARGET) * 0.5;
        point.x >= center.x - half
            && point.x <= center.x + half
            && point.y >= center.y - half
            && point.y <= center.y + half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_follows_shape() {
        assert_eq!(HandleShape::SmallCircle.diameter(6.0, 10.0), 3.0);
        assert_eq!(HandleShape::MediumCircle.diameter(6.0, 10.0), 6.0);
        assert_eq!(HandleShape::LargeCircle.diameter(6.0, 10.0), 16.0);
        assert_eq!(HandleShape::DoubleCircle.diameter(6.0, 10.0), 16.0);
    }

    #[test]
    fn hit_region_never_shrinks_below_the_touch_target() {
        let handle = Handle::new(0.0);
        let center = Point::new(100.0, 100.0);

        // Drawn diameter is 15, but the region stays 44 wide.
        assert!(handle.hit_region_contains(Point::new(121.9, 100.0), center, 5.0));
        assert!(!handle.hit_region_contains(Point::new(122.1, 100.0), center, 5.0));
        assert!(handle.hit_region_contains(Point::new(100.0, 78.1), center, 5.0));
    }
}
