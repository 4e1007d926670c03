//! Handles to a single slot of a [`Column`].
//!
//! A handle stores a borrow of its column and an index.
//! Every read goes to the column at the time of the read,
//! and every write goes through [`Column::set`] / [`Column::reset`],
//! so bounds are checked on use rather than on creation.
//! The borrow ties the handle's lifetime to the column's:
//! a handle cannot outlive its column, and the column cannot be
//! resized while a handle to it exists.

use crate::Column;
use crate::ColumnResult;
use crate::Nullable;
use crate::Truthy;

/// Shared handle to one slot of a [`Column`].
///
/// Created by [`Column::element`].
/// Handles are `Copy` and combine in expressions like
/// [`Nullable`] values do:
///
/// ```
/// use nullcolumn::{Column, Nullable, NULL};
///
/// let column = Column::from(vec![2_i32, 3]);
/// let a = column.element(0);
/// let b = column.element(1);
/// assert_eq!(a * b, 6);
/// assert_eq!(-a, -2);
/// assert_eq!(a * column.element(10), Nullable::Null);
/// assert_eq!(format!("{}", column.element(-1)), "Null");
/// assert_eq!(a.lt(b.get()), true);
/// assert!(a.gt(NULL).is_null());
/// ```
#[derive(Debug)]
pub struct ElementRef<'column, T> {
    column: &'column Column<T>,
    index: Option<usize>,
}

impl<T> Clone for ElementRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementRef<'_, T> {}

impl<'column, T> ElementRef<'column, T> {
    pub(crate) fn new(column: &'column Column<T>, index: Option<usize>) -> Self {
        Self { column, index }
    }

    /// The index of the slot, or `None` if the index
    /// used to create the handle was not a valid position.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The current value of the slot.
    pub fn get(&self) -> Nullable<T>
    where
        T: Clone,
    {
        read_slot(self.column, self.index)
    }

    pub fn has_value(&self) -> bool {
        slot_has_value(self.column, self.index)
    }

    /// The current value, if present.
    pub fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.get().into_option()
    }

    /// The current value.
    ///
    /// # Errors
    ///
    /// [`ColumnError::ValueError`](crate::ColumnError::ValueError)
    /// if the slot is null or out of range.
    pub fn try_value(&self) -> ColumnResult<T>
    where
        T: Clone,
    {
        self.get().try_value()
    }
}

/// Exclusive handle to one slot of a [`Column`].
///
/// Created by [`Column::element_mut`].
/// Writes through to the column.
///
/// ```
/// use nullcolumn::{Column, Nullable};
///
/// let mut column = Column::from(vec![1_i32, 2, 3]);
/// {
///     let mut e = column.element_mut(0);
///     e.assign(100);
///     assert_eq!(&e + 1, 101);
///     e.assign_null();
///     assert!(!e.has_value());
/// }
/// assert_eq!(column.at(0), Nullable::Null);
///
/// // out of range writes are ignored
/// assert!(!column.element_mut(3).assign(4));
/// assert_eq!(column.len(), 3);
/// ```
#[derive(Debug)]
pub struct ElementMut<'column, T> {
    column: &'column mut Column<T>,
    index: Option<usize>,
}

impl<'column, T> ElementMut<'column, T> {
    pub(crate) fn new(column: &'column mut Column<T>, index: Option<usize>) -> Self {
        Self { column, index }
    }

    /// The index of the slot, or `None` if the index
    /// used to create the handle was not a valid position.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The current value of the slot.
    pub fn get(&self) -> Nullable<T>
    where
        T: Clone,
    {
        read_slot(&*self.column, self.index)
    }

    pub fn has_value(&self) -> bool {
        slot_has_value(&*self.column, self.index)
    }

    /// The current value, if present.
    pub fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.get().into_option()
    }

    /// The current value.
    ///
    /// # Errors
    ///
    /// [`ColumnError::ValueError`](crate::ColumnError::ValueError)
    /// if the slot is null or out of range.
    pub fn try_value(&self) -> ColumnResult<T>
    where
        T: Clone,
    {
        self.get().try_value()
    }

    /// Shared handle to the same slot.
    pub fn as_ref(&self) -> ElementRef<'_, T> {
        ElementRef::new(&*self.column, self.index)
    }

    /// Write `value` to the slot.
    ///
    /// Returns `false` if the slot is out of range.
    pub fn assign(&mut self, value: impl Into<Nullable<T>>) -> bool {
        self.column.set_position(self.index, value.into())
    }

    /// Make the slot null.
    ///
    /// Returns `false` if the slot is out of range.
    pub fn assign_null(&mut self) -> bool {
        self.column.set_position(self.index, Nullable::Null)
    }
}

// The methods of Nullable, applied to the current value of the slot.
macro_rules! impl_handle_methods {
    ($handle: ident) => {
        impl<T: Clone> $handle<'_, T> {
            /// Unary plus.
            pub fn pos(&self) -> Nullable<T> {
                self.get().pos()
            }

            /// See [`Nullable::logical_not`].
            pub fn logical_not(&self) -> Nullable<bool>
            where
                T: Truthy,
            {
                self.get().logical_not()
            }

            /// See [`Nullable::equal`].
            pub fn equal(&self, rhs: impl Into<Nullable<T>>) -> bool
            where
                T: PartialEq,
            {
                self.get().equal(rhs)
            }

            pub fn not_equal(&self, rhs: impl Into<Nullable<T>>) -> bool
            where
                T: PartialEq,
            {
                self.get().not_equal(rhs)
            }

            pub fn gt(&self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
            where
                T: PartialOrd,
            {
                self.get().gt(rhs)
            }

            pub fn lt(&self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
            where
                T: PartialOrd,
            {
                self.get().lt(rhs)
            }

            pub fn gt_eq(&self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
            where
                T: PartialOrd,
            {
                self.get().gt_eq(rhs)
            }

            pub fn lt_eq(&self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
            where
                T: PartialOrd,
            {
                self.get().lt_eq(rhs)
            }

            pub fn and(&self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
            where
                T: Truthy,
            {
                self.get().and(rhs)
            }

            pub fn or(&self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
            where
                T: Truthy,
            {
                self.get().or(rhs)
            }
        }
    };
}

impl_handle_methods!(ElementRef);
impl_handle_methods!(ElementMut);

fn read_slot<T: Clone>(column: &Column<T>, index: Option<usize>) -> Nullable<T> {
    match index {
        Some(i) => column.at(i),
        None => Nullable::Null,
    }
}

fn slot_has_value<T>(column: &Column<T>, index: Option<usize>) -> bool {
    index
        .and_then(|i| column.get(i))
        .map_or(false, Nullable::has_value)
}

impl<T: Clone + std::fmt::Display> std::fmt::Display for ElementRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl<T: Clone + std::fmt::Display> std::fmt::Display for ElementMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl<T: Clone + PartialEq> PartialEq<Nullable<T>> for ElementRef<'_, T> {
    fn eq(&self, other: &Nullable<T>) -> bool {
        self.get() == *other
    }
}

impl<T: Clone + PartialEq> PartialEq<Nullable<T>> for ElementMut<'_, T> {
    fn eq(&self, other: &Nullable<T>) -> bool {
        self.get() == *other
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reads_are_live() {
        let mut column = Column::from(vec![1_i32, 2]);
        let mut e = column.element_mut(0);
        assert_eq!(e.get(), 1);
        assert!(e.assign(7));
        assert_eq!(e.get(), 7);
        assert_eq!(e.value(), Some(7));
        assert!(e.assign_null());
        assert_eq!(e.get(), Nullable::Null);
        assert_eq!(e.value(), None);
        assert!(e.try_value().is_err());
        assert!(e.assign(crate::NULL));
    }

    #[test]
    fn test_invalid_index() {
        let mut column = Column::from(vec![1]);
        let e = column.element(-3);
        assert_eq!(e.index(), None);
        assert!(!e.has_value());
        let mut e = column.element_mut(-3);
        assert!(!e.assign(1));
        assert!(!e.assign_null());
        assert_eq!(column, Column::from(vec![1]));
    }

    #[test]
    fn test_as_ref() {
        let mut column = Column::from(vec![1, 2]);
        let e = column.element_mut(1);
        let r = e.as_ref();
        assert_eq!(r.index(), Some(1));
        assert_eq!(r.get(), 2);
        assert!(r == Nullable::Value(2));
    }

    #[test]
    fn test_nullable_methods_on_handles() {
        let mut column = Column::from(vec![0_i32, 4]);
        column.push_null();
        let zero = column.element(0);
        let four = column.element(1);
        let null = column.element(2);
        assert_eq!(four.pos(), 4);
        assert_eq!(zero.logical_not(), true);
        assert!(null.logical_not().is_null());
        assert_eq!(four.gt(zero.get()), true);
        assert_eq!(four.lt(4), false);
        assert_eq!(four.gt_eq(4), true);
        assert_eq!(zero.lt_eq(null.get()), Nullable::Null);
        assert_eq!(four.and(zero.get()), false);
        assert_eq!(four.or(zero.get()), true);
        assert!(four.or(crate::NULL).is_null());
        assert!(null.equal(crate::NULL));
        assert!(four.not_equal(null.get()));

        let mut e = column.element_mut(1);
        assert_eq!(e.gt(3), true);
        e.assign(1);
        assert_eq!(e.lt_eq(1), true);
        assert_eq!(e.logical_not(), false);
        assert!(e.equal(1));
    }
}
