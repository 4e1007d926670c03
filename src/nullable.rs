use crate::algebra::{
    BinaryOperator, Greater, GreaterEqual, Identity, Less, LessEqual, LogicalAnd, LogicalNot,
    LogicalOr, UnaryOperator,
};
use crate::CheckedArithmetic;
use crate::ColumnError;
use crate::NullableElement;
use crate::Truthy;

/// Rendering of an absent value.
pub const NULL_TOKEN: &str = "Null";

/// A value that may be absent.
///
/// Operators propagate absence: if either operand is
/// [`Null`](Nullable::Null), so is the result.
/// Equality is the exception and always gives a definite `bool`.
///
/// # Examples
///
/// Arithmetic
///
/// ```
/// use nullcolumn::{Nullable, NULL};
///
/// let x = Nullable::Value(6_i32);
/// assert_eq!(x * 2, 12);
/// assert_eq!(2 * x, 12);
/// assert_eq!(x - Nullable::Value(1_i32), 5);
/// assert_eq!(x / Nullable::<i32>::Null, Nullable::Null);
/// assert_eq!(x + NULL, Nullable::Null);
/// assert_eq!(-x, -6);
/// ```
///
/// Equality
///
/// ```
/// use nullcolumn::{Nullable, NULL};
///
/// let null = Nullable::<i32>::Null;
/// assert!(null == Nullable::Null);
/// assert!(null == NULL);
/// assert!(!(null == 5));
/// assert!(5 != null);
/// ```
///
/// Ordering comparisons propagate absence
///
/// ```
/// use nullcolumn::Nullable;
///
/// assert_eq!(Nullable::Value(3_i32).gt(2), true);
/// assert_eq!(Nullable::Value(3_i32).lt_eq(2), false);
/// assert_eq!(Nullable::<i32>::Null.gt(2), Nullable::Null);
/// ```
///
/// Display
///
/// ```
/// use nullcolumn::Nullable;
///
/// assert_eq!(format!("{}", Nullable::Value(1.5)), "1.5");
/// assert_eq!(format!("{}", Nullable::<f64>::Null), "Null");
/// ```
#[derive(Copy, Clone, Debug, std::hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nullable<T> {
    /// Absent
    Null,
    /// Present
    Value(T),
}

/// The untyped null literal.
///
/// Usable as an operand anywhere a [`Nullable`] is,
/// and always produces a null result.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct NullValue;

/// The null literal.
pub const NULL: NullValue = NullValue;

impl std::fmt::Display for NullValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", NULL_TOKEN)
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Null
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: NullableElement> From<NullValue> for Nullable<T> {
    fn from(_: NullValue) -> Self {
        Self::Null
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Null => write!(f, "{}", NULL_TOKEN),
        }
    }
}

impl<T> Nullable<T> {
    /// An absent value
    pub const fn null() -> Self {
        Self::Null
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn has_value(&self) -> bool {
        !self.is_null()
    }

    /// Reference to the value, if present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null => None,
        }
    }

    /// The value.
    ///
    /// # Errors
    ///
    /// [`ColumnError::ValueError`] if the value is absent.
    ///
    /// ```
    /// use nullcolumn::Nullable;
    ///
    /// assert_eq!(Nullable::Value(1).try_value().unwrap(), 1);
    /// assert!(Nullable::<i32>::Null.try_value().is_err());
    /// ```
    pub fn try_value(self) -> Result<T, ColumnError> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Null => Err(ColumnError::ValueError {
                got: NULL_TOKEN.to_string(),
                expected: "a value".to_string(),
            }),
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Value(v) => v,
            Self::Null => default,
        }
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Value(v) => Nullable::Value(v),
            Self::Null => Nullable::Null,
        }
    }

    /// Apply `f` to a present value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Value(v) => Nullable::Value(f(v)),
            Self::Null => Nullable::Null,
        }
    }

    /// Apply `f` if both `self` and `other` are present.
    pub fn zip_with<U, R, F: FnOnce(T, U) -> R>(self, other: Nullable<U>, f: F) -> Nullable<R> {
        match (self, other) {
            (Self::Value(a), Nullable::Value(b)) => Nullable::Value(f(a, b)),
            _ => Nullable::Null,
        }
    }

    /// Apply the unary operator `K` with null propagation.
    pub fn apply_unary<K: UnaryOperator<T>>(self) -> Nullable<<K as UnaryOperator<T>>::Output> {
        self.map(K::apply)
    }

    /// Apply the binary operator `K` with null propagation.
    pub fn apply_binary<K: BinaryOperator<T, R>, R>(
        self,
        rhs: Nullable<R>,
    ) -> Nullable<<K as BinaryOperator<T, R>>::Output> {
        self.zip_with(rhs, K::apply)
    }

    /// Unary plus.
    pub fn pos(self) -> Self {
        self.apply_unary::<Identity>()
    }

    /// Logical negation, giving a `bool` for any [`Truthy`] type.
    ///
    /// ```
    /// use nullcolumn::Nullable;
    ///
    /// assert_eq!(Nullable::Value(1_i32).logical_not(), false);
    /// assert_eq!(Nullable::Value(0_i32).logical_not(), true);
    /// assert_eq!(Nullable::<i32>::Null.logical_not(), Nullable::Null);
    /// ```
    pub fn logical_not(self) -> Nullable<bool>
    where
        T: Truthy,
    {
        self.apply_unary::<LogicalNot>()
    }

    /// Equality that never propagates null.
    ///
    /// Two absent values are equal. An absent value
    /// never equals a present one.
    ///
    /// ```
    /// use nullcolumn::{Nullable, NULL};
    ///
    /// assert!(Nullable::<i32>::Null.equal(NULL));
    /// assert!(!Nullable::Value(1_i32).equal(NULL));
    /// assert!(Nullable::Value(1_i32).equal(1));
    /// ```
    pub fn equal(&self, rhs: impl Into<Nullable<T>>) -> bool
    where
        T: PartialEq,
    {
        slots_equal(self, &rhs.into())
    }

    /// Negation of [`Nullable::equal`].
    pub fn not_equal(&self, rhs: impl Into<Nullable<T>>) -> bool
    where
        T: PartialEq,
    {
        !self.equal(rhs)
    }

    pub fn gt(self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
    where
        T: PartialOrd,
    {
        self.apply_binary::<Greater, T>(rhs.into())
    }

    pub fn lt(self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
    where
        T: PartialOrd,
    {
        self.apply_binary::<Less, T>(rhs.into())
    }

    pub fn gt_eq(self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
    where
        T: PartialOrd,
    {
        self.apply_binary::<GreaterEqual, T>(rhs.into())
    }

    pub fn lt_eq(self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
    where
        T: PartialOrd,
    {
        self.apply_binary::<LessEqual, T>(rhs.into())
    }

    /// Logical and. Null if either operand is null,
    /// including when the other is `false`.
    pub fn and(self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
    where
        T: Truthy,
    {
        self.apply_binary::<LogicalAnd, T>(rhs.into())
    }

    /// Logical or. Null if either operand is null,
    /// including when the other is `true`.
    pub fn or(self, rhs: impl Into<Nullable<T>>) -> Nullable<bool>
    where
        T: Truthy,
    {
        self.apply_binary::<LogicalOr, T>(rhs.into())
    }

    /// Division that gives null instead of panicking.
    ///
    /// ```
    /// use nullcolumn::Nullable;
    ///
    /// assert_eq!(Nullable::Value(7_i32).checked_div(2), 3);
    /// assert_eq!(Nullable::Value(7_i32).checked_div(0), Nullable::Null);
    /// ```
    pub fn checked_div(self, rhs: impl Into<Nullable<T>>) -> Nullable<T>
    where
        T: CheckedArithmetic,
    {
        let quotient = self.zip_with(rhs.into(), T::checked_division);
        Nullable::from_option(quotient.into_option().flatten())
    }

    /// Remainder that gives null instead of panicking.
    pub fn checked_rem(self, rhs: impl Into<Nullable<T>>) -> Nullable<T>
    where
        T: CheckedArithmetic,
    {
        let remainder = self.zip_with(rhs.into(), T::checked_remainder);
        Nullable::from_option(remainder.into_option().flatten())
    }
}

fn slots_equal<T: PartialEq>(lhs: &Nullable<T>, rhs: &Nullable<T>) -> bool {
    match (lhs, rhs) {
        (Nullable::Value(a), Nullable::Value(b)) => a == b,
        (Nullable::Null, Nullable::Null) => true,
        _ => false,
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        slots_equal(self, other)
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T> PartialEq<NullValue> for Nullable<T> {
    fn eq(&self, _: &NullValue) -> bool {
        self.is_null()
    }
}

impl<T> PartialEq<Nullable<T>> for NullValue {
    fn eq(&self, other: &Nullable<T>) -> bool {
        other.is_null()
    }
}
