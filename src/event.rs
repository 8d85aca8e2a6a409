/// Identifies one of the two handles of a [`DoubleCircularSlider`].
///
/// [`DoubleCircularSlider`]: crate::DoubleCircularSlider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandleId {
    First,
    Second,
}

/// Something a [`CircularSlider`] wants its host to know about.
///
/// Events queue up inside the slider as touches and setters mutate it;
/// hosts drain them with [`CircularSlider::take_events`] after feeding in
/// input.
///
/// [`CircularSlider`]: crate::CircularSlider
/// [`CircularSlider::take_events`]: crate::CircularSlider::take_events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// The value moved. `from_user` is `true` when a drag moved it and
    /// `false` for programmatic assignment and snap-on-release.
    ValueChanged { value: f32, from_user: bool },
    /// A touch landed on the handle and a drag began.
    TrackingStarted { value: f32 },
    /// The drag ended (touch up or cancel), before any snap applies.
    TrackingEnded { value: f32 },
}

/// The dual-handle counterpart of [`SliderEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DualSliderEvent {
    /// One or both values moved. `handle` names the dragged handle, or is
    /// `None` for programmatic assignment.
    ValuesChanged {
        first: f32,
        second: f32,
        handle: Option<HandleId>,
        from_user: bool,
    },
    TrackingStarted {
        first: f32,
        second: f32,
        handle: HandleId,
    },
    TrackingEnded {
        first: f32,
        second: f32,
        handle: HandleId,
    },
}
