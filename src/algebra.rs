//! Operator kinds of the nullable algebra.
//!
//! Each operator is a zero-sized tag implementing [`UnaryOperator`]
//! or [`BinaryOperator`] with the *underlying* total function.
//! Null propagation is applied once, in
//! [`Nullable::apply_unary`](crate::Nullable::apply_unary) and
//! [`Nullable::apply_binary`](crate::Nullable::apply_binary),
//! and every `std::ops` implementation of this crate goes through them.
//!
//! Equality is the one operator not expressed here:
//! it never propagates null.
//! See [`Nullable::equal`](crate::Nullable::equal).
//!
//! # Examples
//!
//! ```
//! use nullcolumn::algebra::{Greater, Plus};
//! use nullcolumn::Nullable;
//!
//! let x = Nullable::Value(2_i32);
//! assert_eq!(x.apply_binary::<Plus, _>(Nullable::Value(3)), 5);
//! assert_eq!(x.apply_binary::<Plus, _>(Nullable::<i32>::Null), Nullable::Null);
//! assert_eq!(x.apply_binary::<Greater, _>(Nullable::Value(1)), true);
//! ```

use crate::Truthy;

/// An operator taking one operand.
pub trait UnaryOperator<T> {
    type Output;
    fn apply(operand: T) -> Self::Output;
}

/// An operator taking two operands.
pub trait BinaryOperator<L, R> {
    type Output;
    fn apply(lhs: L, rhs: R) -> Self::Output;
}

macro_rules! binary_operator_from_std {
    ($(#[$attr: meta])* $tag: ident, $trait: ident, $method: ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $tag;

        impl<L: std::ops::$trait<R>, R> BinaryOperator<L, R> for $tag {
            type Output = <L as std::ops::$trait<R>>::Output;
            fn apply(lhs: L, rhs: R) -> Self::Output {
                std::ops::$trait::$method(lhs, rhs)
            }
        }
    };
}

macro_rules! comparison_operator {
    ($(#[$attr: meta])* $tag: ident, $method: ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $tag;

        impl<L: PartialOrd<R>, R> BinaryOperator<L, R> for $tag {
            type Output = bool;
            fn apply(lhs: L, rhs: R) -> bool {
                lhs.$method(&rhs)
            }
        }
    };
}

binary_operator_from_std!(
    /// `lhs + rhs`
    Plus,
    Add,
    add
);
binary_operator_from_std!(
    /// `lhs - rhs`
    Minus,
    Sub,
    sub
);
binary_operator_from_std!(
    /// `lhs * rhs`
    Multiplies,
    Mul,
    mul
);
binary_operator_from_std!(
    /// `lhs / rhs`
    ///
    /// Integer division by zero panics, as it does for the primitive.
    Divides,
    Div,
    div
);
binary_operator_from_std!(
    /// `lhs % rhs`
    Modulus,
    Rem,
    rem
);
binary_operator_from_std!(
    /// `lhs & rhs`
    BitwiseAnd,
    BitAnd,
    bitand
);
binary_operator_from_std!(
    /// `lhs | rhs`
    BitwiseOr,
    BitOr,
    bitor
);
binary_operator_from_std!(
    /// `lhs ^ rhs`
    BitwiseXor,
    BitXor,
    bitxor
);

comparison_operator!(
    /// `lhs > rhs`
    Greater,
    gt
);
comparison_operator!(
    /// `lhs < rhs`
    Less,
    lt
);
comparison_operator!(
    /// `lhs >= rhs`
    GreaterEqual,
    ge
);
comparison_operator!(
    /// `lhs <= rhs`
    LessEqual,
    le
);

/// `lhs && rhs`, on the [`Truthy`] value of each operand.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogicalAnd;

impl<L: Truthy, R: Truthy> BinaryOperator<L, R> for LogicalAnd {
    type Output = bool;
    fn apply(lhs: L, rhs: R) -> bool {
        lhs.truthy() && rhs.truthy()
    }
}

/// `lhs || rhs`, on the [`Truthy`] value of each operand.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogicalOr;

impl<L: Truthy, R: Truthy> BinaryOperator<L, R> for LogicalOr {
    type Output = bool;
    fn apply(lhs: L, rhs: R) -> bool {
        lhs.truthy() || rhs.truthy()
    }
}

/// The operand, unchanged.
///
/// This is unary `+`, which rust does not have as an operator.
#[derive(Copy, Clone, Debug, Default)]
pub struct Identity;

impl<T> UnaryOperator<T> for Identity {
    type Output = T;
    fn apply(operand: T) -> T {
        operand
    }
}

/// `-operand`
#[derive(Copy, Clone, Debug, Default)]
pub struct Negate;

impl<T: std::ops::Neg> UnaryOperator<T> for Negate {
    type Output = T::Output;
    fn apply(operand: T) -> Self::Output {
        -operand
    }
}

/// `!operand`
///
/// Bitwise for integers and logical for `bool`,
/// following [`std::ops::Not`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BitwiseNot;

impl<T: std::ops::Not> UnaryOperator<T> for BitwiseNot {
    type Output = T::Output;
    fn apply(operand: T) -> Self::Output {
        !operand
    }
}

/// Logical negation of the [`Truthy`] value.
/// The result is a `bool` whatever the operand type.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogicalNot;

impl<T: Truthy> UnaryOperator<T> for LogicalNot {
    type Output = bool;
    fn apply(operand: T) -> bool {
        !operand.truthy()
    }
}
