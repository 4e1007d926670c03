//! `std::ops` implementations.
//!
//! | left \ right    | `Nullable` | `NULL` | scalar | `ElementRef` | `Column` |
//! |-----------------|------------|--------|--------|--------------|----------|
//! | `Nullable`      | `Nullable` | `Nullable` | `Nullable` | `Nullable` | `Column` |
//! | `NULL`          | `Nullable` |        |        | `Nullable`   | `Column` |
//! | scalar          | `Nullable` |        |        | `Nullable`   | `Column` |
//! | `ElementRef`    | `Nullable` | `Nullable` | `Nullable` | `Nullable` | `Column` |
//! | `Column`        | `Column`   | `Column` | `Column` | `Column`   | `Column` |
//!
//! `&ElementMut` behaves as `ElementRef` on either side.
//! A scalar takes the element type of the other operand,
//! so `&Column::<u64>::from(vec![1]) * 2` multiplies by `2_u64`.
//! `Column` on either side means both `Column` and `&Column`.

impl_unary_operator!(Neg, neg, Negate);
impl_unary_operator!(Not, not, BitwiseNot);

impl_binary_operator!(Add, add, Plus);
impl_binary_operator!(Sub, sub, Minus);
impl_binary_operator!(Mul, mul, Multiplies);
impl_binary_operator!(Div, div, Divides);
impl_binary_operator!(Rem, rem, Modulus);
impl_binary_operator!(BitAnd, bitand, BitwiseAnd);
impl_binary_operator!(BitOr, bitor, BitwiseOr);
impl_binary_operator!(BitXor, bitxor, BitwiseXor);

impl_scalar_operator!(
    Add, add, Plus, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
impl_scalar_operator!(
    Sub, sub, Minus, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
impl_scalar_operator!(
    Mul, mul, Multiplies, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64
);
impl_scalar_operator!(
    Div, div, Divides, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
impl_scalar_operator!(
    Rem, rem, Modulus, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
impl_scalar_operator!(
    BitAnd, bitand, BitwiseAnd, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    bool
);
impl_scalar_operator!(
    BitOr, bitor, BitwiseOr, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    bool
);
impl_scalar_operator!(
    BitXor, bitxor, BitwiseXor, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    bool
);

impl_scalar_equality!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);
