#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SliderError {
    #[error("label index {index} out of bounds (count {count})")]
    LabelIndexOutOfBounds { index: usize, count: usize },

    #[error("gradient color index {index} out of bounds (count {count})")]
    ColorIndexOutOfBounds { index: usize, count: usize },

    #[error("gradient track must keep at least two colors")]
    GradientTooSmall,
}
