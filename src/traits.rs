//! Traits related to user-facing types

use crate::Column;
use crate::ElementMut;
use crate::ElementRef;
use crate::NullValue;
use crate::Nullable;

mod private {
    pub trait SlotIndexMarker {}
}

/// Types usable as a column index.
///
/// # Notes
///
/// * This trait is sealed.
///
/// Signed integers are accepted so that an index such as `-1`
/// can be passed without a cast. Any value that does not map to
/// a `usize` position is out of range, exactly like an index past
/// the end of the column:
///
/// ```
/// use nullcolumn::{Column, Nullable};
///
/// let column = Column::from(vec![1, 2, 3]);
/// assert_eq!(column.at(-1), Nullable::Null);
/// assert_eq!(column.at(3_usize), Nullable::Null);
/// assert_eq!(column.at(2_i64), 3);
/// ```
pub trait SlotIndex: Copy + std::fmt::Display + private::SlotIndexMarker {
    /// The position in a column, or `None` if
    /// the value is not representable as one.
    fn to_position(self) -> Option<usize>;
}

macro_rules! impl_slot_index {
    ($($t: ty),*) => {
        $(
            impl private::SlotIndexMarker for $t {}

            impl SlotIndex for $t {
                #[allow(clippy::useless_conversion)]
                fn to_position(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_slot_index!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

/// Conversion of an element to a boolean for
/// the logical operators.
///
/// Numbers are `true` when non-zero.
///
/// ```
/// use nullcolumn::Truthy;
///
/// assert!(3_i32.truthy());
/// assert!(!0.0_f64.truthy());
/// assert!(true.truthy());
/// ```
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy {
    ($zero: expr, $($t: ty),*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

impl_truthy!(0, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_truthy!(0.0, f32, f64);

/// Division and remainder that report a failed operation
/// instead of panicking.
///
/// Used by [`Nullable::checked_div`], [`Nullable::checked_rem`]
/// and their [`Column`] equivalents, which turn a failure into
/// [`Nullable::Null`].
pub trait CheckedArithmetic: Sized {
    fn checked_division(self, rhs: Self) -> Option<Self>;
    fn checked_remainder(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_checked_arithmetic_for_integers {
    ($($t: ty),*) => {
        $(
            impl CheckedArithmetic for $t {
                fn checked_division(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }
                fn checked_remainder(self, rhs: Self) -> Option<Self> {
                    self.checked_rem(rhs)
                }
            }
        )*
    };
}

impl_checked_arithmetic_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// IEEE division does not fail
macro_rules! impl_checked_arithmetic_for_floats {
    ($($t: ty),*) => {
        $(
            impl CheckedArithmetic for $t {
                fn checked_division(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
                fn checked_remainder(self, rhs: Self) -> Option<Self> {
                    Some(self % rhs)
                }
            }
        )*
    };
}

impl_checked_arithmetic_for_floats!(f32, f64);

/// Element types the untyped [`NULL`](crate::NULL) literal converts into.
///
/// Implemented for the primitive types, `char`, `String` and `&str`.
/// Implement it for your own element type to pass `NULL` to
/// [`Column::set`], [`Column::push`] and the comparison methods:
///
/// ```
/// use nullcolumn::{Column, NullableElement, NULL};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Label(&'static str);
///
/// impl NullableElement for Label {}
///
/// let mut column = Column::from(vec![Label("a")]);
/// assert!(column.set(0, NULL));
/// assert_eq!(column.null_count(), 1);
/// ```
pub trait NullableElement {}

macro_rules! impl_nullable_element {
    ($($t: ty),*) => {
        $(
            impl NullableElement for $t {}
        )*
    };
}

impl_nullable_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String
);

impl NullableElement for &str {}

/// Interface of the right-hand operand of a column operation
/// on a `Column<T>`.
///
/// A [`Column`] supplies one slot per position.
/// Scalars (bare values, [`Nullable`] values, [`NULL`](crate::NULL)
/// and element handles) report no slot count and are broadcast
/// to every position.
///
/// Reading past the end of an operand with a slot count
/// must return [`Nullable::Null`]. This is what null-pads the shorter
/// operand when two columns of different lengths are combined.
pub trait Broadcast<T> {
    /// Number of slots, or `None` for a scalar.
    fn slot_count(&self) -> Option<usize>;

    /// The value at `index`.
    fn slot(&self, index: usize) -> Nullable<T>;
}

impl<T, B: Broadcast<T> + ?Sized> Broadcast<T> for &B {
    fn slot_count(&self) -> Option<usize> {
        (**self).slot_count()
    }

    fn slot(&self, index: usize) -> Nullable<T> {
        (**self).slot(index)
    }
}

impl<T: Clone> Broadcast<T> for Column<T> {
    fn slot_count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn slot(&self, index: usize) -> Nullable<T> {
        self.at(index)
    }
}

impl<T: Clone> Broadcast<T> for Nullable<T> {
    fn slot_count(&self) -> Option<usize> {
        None
    }

    fn slot(&self, _: usize) -> Nullable<T> {
        self.clone()
    }
}

impl<T> Broadcast<T> for NullValue {
    fn slot_count(&self) -> Option<usize> {
        None
    }

    fn slot(&self, _: usize) -> Nullable<T> {
        Nullable::Null
    }
}

impl<T: Clone> Broadcast<T> for ElementRef<'_, T> {
    fn slot_count(&self) -> Option<usize> {
        None
    }

    fn slot(&self, _: usize) -> Nullable<T> {
        self.get()
    }
}

impl<T: Clone> Broadcast<T> for ElementMut<'_, T> {
    fn slot_count(&self) -> Option<usize> {
        None
    }

    fn slot(&self, _: usize) -> Nullable<T> {
        self.get()
    }
}

// Concrete per type, so that an unsuffixed literal
// takes the element type of the column.
macro_rules! impl_broadcast_for_scalars {
    ($($t: ty),*) => {
        $(
            impl Broadcast<$t> for $t {
                fn slot_count(&self) -> Option<usize> {
                    None
                }

                fn slot(&self, _: usize) -> Nullable<$t> {
                    Nullable::Value(*self)
                }
            }
        )*
    };
}

impl_broadcast_for_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);
