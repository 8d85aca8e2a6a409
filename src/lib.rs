//! A circular slider control core for touch interfaces.
//!
//! `arcdial` owns the geometry and interaction of a round dial with one
//! or two draggable handles: touch-point to compass-angle to value
//! conversion, constrained dragging (open-arc clamping, minimum handle
//! separation), and snap-to-mark on release. It draws nothing; hosts
//! feed it touch events and react to the events and redraw requests it
//! queues up.
//!
//! ```
//! use arcdial::math::{Point, Size};
//! use arcdial::{CircularSlider, SliderEvent};
//!
//! let mut slider = CircularSlider::new(Size::new(200.0, 200.0));
//! slider.set_value(50.0);
//!
//! if slider.touch_down(Point::new(150.0, 100.0)) {
//!     slider.touch_move(Point::new(0.0, 99.0));
//!     slider.touch_up();
//! }
//!
//! for event in slider.take_events() {
//!     if let SliderEvent::ValueChanged { value, from_user } = event {
//!         println!("value {value} (from user: {from_user})");
//!     }
//! }
//!
//! if slider.take_redraw_request() {
//!     // repaint the dial at slider.handle_center()
//! }
//! ```

mod double;
mod error;
mod event;
mod handle;
mod slider;

pub mod marks;

#[cfg(feature = "gradient")]
mod gradient;

pub use double::DoubleCircularSlider;
pub use error::SliderError;
pub use event::{DualSliderEvent, HandleId, SliderEvent};
pub use handle::{Handle, HandleShape, MIN_TOUCH_TARGET};
pub use marks::Marks;
pub use slider::CircularSlider;

#[cfg(feature = "gradient")]
pub use gradient::{ColorTrack, TrackColor};

pub use arcdial_core::*;
