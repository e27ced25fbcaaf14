//! Product types: a pair of values and views focused on one of its slots.
//!
//! - [`Pair`]: two values held together
//! - [`FirstFocus`] / [`SecondFocus`]: a pair seen through one slot
//!
//! Focusing is a view, not a new value. A pair, a first focus over it and a
//! second focus over it are mutually equal and share one hash:
//!
//! ```rust
//! use curie::product::Pair;
//!
//! let pair = Pair::new(1, 'a');
//! assert_eq!(pair, pair.focus_first());
//! assert_eq!(pair.focus_first(), pair.focus_second());
//! assert_eq!(pair.focus_second(), pair);
//! ```

mod focus;
mod pair;
mod view;

pub use focus::{FirstFocus, SecondFocus};
pub use pair::{Pair, PairMissingFirst, PairMissingSecond, PairOf};
