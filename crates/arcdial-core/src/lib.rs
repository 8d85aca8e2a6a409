pub mod math;

mod range;
mod sweep;

pub use range::ValueRange;
pub use sweep::Sweep;
