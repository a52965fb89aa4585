//! Forward-mode truncated Taylor arithmetic.
//!
//! [`Jet`] carries the raw derivatives of a one-variable function up to a
//! fixed order; [`Series`] carries every mixed partial derivative up to a
//! fixed total order of an `N`-variable function, storing each symmetric
//! tensor entry once. Both propagate derivatives through closed-form
//! recurrences: the Leibniz rule for products and the Faà di Bruno formula
//! for elementary functions.
//!
//! ```
//! use taylorjet::Series;
//!
//! // f(x, y) = exp(x·y) at (1, 2), all partials up to order 2.
//! let x = Series::<f64, 2, 2>::variable(1.0, 1);
//! let y = Series::<f64, 2, 2>::variable(2.0, 2);
//! let f = (&x * &y).exp();
//!
//! let e2 = 2.0_f64.exp();
//! assert!((f.derivative(&[1]) - 2.0 * e2).abs() < 1e-12);
//! assert!((f.derivative(&[1, 2]) - 3.0 * e2).abs() < 1e-12);
//! assert_eq!(f.derivative(&[1, 2]), f.derivative(&[2, 1]));
//! ```

pub mod binomial;
pub mod error;
pub mod float;
pub mod jet;
pub mod jet_ops;
pub mod multi_index;
pub mod series;
pub mod tables;
mod traits;

#[cfg(feature = "serde")]
mod serde_support;

pub use binomial::MAX_JET_LEN;
pub use error::SeriesError;
pub use float::Float;
pub use jet::Jet;
pub use multi_index::{canonical_indices, MultiIndex};
pub use series::Series;
pub use tables::MAX_ORDER;

/// Type alias for univariate jets over `f64`.
pub type Jet64<const K: usize> = Jet<f64, K>;
/// Type alias for univariate jets over `f32`.
pub type Jet32<const K: usize> = Jet<f32, K>;
/// Type alias for multivariate series over `f64`.
pub type Series64<const N: usize, const K: usize> = Series<f64, N, K>;
/// Type alias for multivariate series over `f32`.
pub type Series32<const N: usize, const K: usize> = Series<f32, N, K>;
