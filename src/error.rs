use std::fmt;

/// Checked precondition failures when addressing or building a [`Series`](crate::Series).
///
/// Numerical domain problems (log of a negative base, division by a zero
/// value) are not errors; they propagate as NaN/Inf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesError {
    /// More labels than the series order `K` were supplied.
    TooManyLabels {
        /// Maximum number of labels (the order `K`).
        order: usize,
    },
    /// A label exceeded the number of independent variables `N`.
    LabelOutOfRange {
        /// Offending label.
        label: usize,
        /// Largest valid label.
        dims: usize,
    },
    /// A raw derivative buffer had the wrong length for the shape.
    LengthMismatch {
        /// `(N + 1)^K`.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// A raw derivative buffer held a non-zero value in a padding slot,
    /// i.e. at an offset that does not decode to a canonical multi-index.
    NonZeroPadding {
        /// Offset of the first offending slot.
        offset: usize,
    },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::TooManyLabels { order } => {
                write!(f, "too many differentiation labels: at most {} allowed", order)
            }
            SeriesError::LabelOutOfRange { label, dims } => {
                write!(f, "label {} out of range: labels must be in 0..={}", label, dims)
            }
            SeriesError::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "derivative buffer has length {} but the shape needs {}",
                    found, expected
                )
            }
            SeriesError::NonZeroPadding { offset } => {
                write!(f, "non-canonical padding slot {} is not zero", offset)
            }
        }
    }
}

impl std::error::Error for SeriesError {}
