//! Nullable values and columns of nullable values.
//!
//! A [`Nullable<T>`] is either [`Nullable::Value`] or [`Nullable::Null`].
//! A [`Column<T>`] is an ordered sequence of such slots.
//!
//! The standard operators work on every combination of
//! nullables, columns, element handles, plain values and the
//! [`NULL`] literal.
//! A null operand gives a null result, except for equality,
//! which always gives a `bool`.
//!
//! ```
//! use nullcolumn::prelude::*;
//!
//! let mut prices = Column::from(vec![10.0_f64, 20.0, 30.0]);
//! prices.reset(1);
//! let quantities = Column::from(vec![2.0_f64, 3.0]);
//!
//! let totals = &prices * &quantities;
//! assert_eq!(format!("{}", totals), "20\nNull\nNull\n");
//! assert_eq!(totals.null_count(), 2);
//! ```
//!
//! # Optional features
//!
//! * `serde`: `Serialize`/`Deserialize` for [`Nullable`] and [`Column`].

mod _macros; // Starts w/_ to be sorted at front by rustfmt!
pub mod algebra;
mod column;
mod element;
pub mod error;
mod nullable;
mod operators;
pub mod prelude;
mod traits;

pub use column::Column;
pub use element::{ElementMut, ElementRef};
pub use error::{ColumnError, ColumnResult};
pub use nullable::{NullValue, Nullable, NULL, NULL_TOKEN};
pub use traits::{Broadcast, CheckedArithmetic, NullableElement, SlotIndex, Truthy};

/// Get the crate version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod test {
    #[test]
    fn test_version() {
        assert_eq!(super::version(), env!("CARGO_PKG_VERSION"));
    }
}
