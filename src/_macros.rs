#![macro_use]

// Operator impls for every combination of
// Nullable, NullValue, Column, ElementRef, ElementMut and
// primitive scalars. All of them funnel into
// Nullable::apply_unary / Nullable::apply_binary.
// A right-hand operand is never a bare generic type parameter,
// so the shape of each operand alone selects the impl.

macro_rules! impl_unary_operator {
    ($trait: ident, $method: ident, $tag: ident) => {
        impl<T> std::ops::$trait for crate::Nullable<T>
        where
            crate::algebra::$tag: crate::algebra::UnaryOperator<T>,
        {
            type Output =
                crate::Nullable<<crate::algebra::$tag as crate::algebra::UnaryOperator<T>>::Output>;
            fn $method(self) -> Self::Output {
                self.apply_unary::<crate::algebra::$tag>()
            }
        }

        impl<T: Clone> std::ops::$trait for &crate::Column<T>
        where
            crate::algebra::$tag: crate::algebra::UnaryOperator<T>,
        {
            type Output =
                crate::Column<<crate::algebra::$tag as crate::algebra::UnaryOperator<T>>::Output>;
            fn $method(self) -> Self::Output {
                self.map(|slot| slot.apply_unary::<crate::algebra::$tag>())
            }
        }

        impl<T: Clone> std::ops::$trait for crate::Column<T>
        where
            crate::algebra::$tag: crate::algebra::UnaryOperator<T>,
        {
            type Output =
                crate::Column<<crate::algebra::$tag as crate::algebra::UnaryOperator<T>>::Output>;
            fn $method(self) -> Self::Output {
                <&crate::Column<T> as std::ops::$trait>::$method(&self)
            }
        }

        impl<T: Clone> std::ops::$trait for crate::ElementRef<'_, T>
        where
            crate::algebra::$tag: crate::algebra::UnaryOperator<T>,
        {
            type Output =
                crate::Nullable<<crate::algebra::$tag as crate::algebra::UnaryOperator<T>>::Output>;
            fn $method(self) -> Self::Output {
                self.get().apply_unary::<crate::algebra::$tag>()
            }
        }

        impl<T: Clone> std::ops::$trait for &crate::ElementMut<'_, T>
        where
            crate::algebra::$tag: crate::algebra::UnaryOperator<T>,
        {
            type Output =
                crate::Nullable<<crate::algebra::$tag as crate::algebra::UnaryOperator<T>>::Output>;
            fn $method(self) -> Self::Output {
                self.get().apply_unary::<crate::algebra::$tag>()
            }
        }
    };
}

// Generic impls over the element types: the left operand is a
// Nullable, NullValue, Column or element handle, and so is the right.
// A bare scalar on either side is handled by impl_scalar_operator!.
macro_rules! impl_binary_operator {
    ($trait: ident, $method: ident, $tag: ident) => {
        impl<L, R> std::ops::$trait<crate::Nullable<R>> for crate::Nullable<L>
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Nullable<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::Nullable<R>) -> Self::Output {
                self.apply_binary::<crate::algebra::$tag, R>(rhs)
            }
        }

        impl<L> std::ops::$trait<crate::NullValue> for crate::Nullable<L> {
            type Output = crate::Nullable<L>;
            fn $method(self, _: crate::NullValue) -> Self::Output {
                crate::Nullable::Null
            }
        }

        impl<L, R: Clone> std::ops::$trait<crate::ElementRef<'_, R>> for crate::Nullable<L>
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Nullable<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::ElementRef<'_, R>) -> Self::Output {
                self.apply_binary::<crate::algebra::$tag, R>(rhs.get())
            }
        }

        impl<L, R: Clone> std::ops::$trait<&crate::ElementMut<'_, R>> for crate::Nullable<L>
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Nullable<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: &crate::ElementMut<'_, R>) -> Self::Output {
                self.apply_binary::<crate::algebra::$tag, R>(rhs.get())
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<&crate::Column<R>> for crate::Nullable<L>
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: &crate::Column<R>) -> Self::Output {
                rhs.map(|slot| self.clone().apply_binary::<crate::algebra::$tag, R>(slot))
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<crate::Column<R>> for crate::Nullable<L>
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::Column<R>) -> Self::Output {
                <Self as std::ops::$trait<&crate::Column<R>>>::$method(self, &rhs)
            }
        }

        impl<R> std::ops::$trait<crate::Nullable<R>> for crate::NullValue {
            type Output = crate::Nullable<R>;
            fn $method(self, _: crate::Nullable<R>) -> Self::Output {
                crate::Nullable::Null
            }
        }

        impl<R> std::ops::$trait<crate::ElementRef<'_, R>> for crate::NullValue {
            type Output = crate::Nullable<R>;
            fn $method(self, _: crate::ElementRef<'_, R>) -> Self::Output {
                crate::Nullable::Null
            }
        }

        impl<R> std::ops::$trait<&crate::ElementMut<'_, R>> for crate::NullValue {
            type Output = crate::Nullable<R>;
            fn $method(self, _: &crate::ElementMut<'_, R>) -> Self::Output {
                crate::Nullable::Null
            }
        }

        impl<R> std::ops::$trait<&crate::Column<R>> for crate::NullValue {
            type Output = crate::Column<R>;
            fn $method(self, rhs: &crate::Column<R>) -> Self::Output {
                crate::Column::nulls(rhs.len())
            }
        }

        impl<R> std::ops::$trait<crate::Column<R>> for crate::NullValue {
            type Output = crate::Column<R>;
            fn $method(self, rhs: crate::Column<R>) -> Self::Output {
                crate::Column::nulls(rhs.len())
            }
        }

        impl_column_binary_operator!($trait, $method, $tag, &crate::Column<L>);
        impl_column_binary_operator!($trait, $method, $tag, crate::Column<L>);
        impl_element_binary_operator!($trait, $method, $tag, crate::ElementRef<'_, L>);
        impl_element_binary_operator!($trait, $method, $tag, &crate::ElementMut<'_, L>);
    };
}

// Column (owned or borrowed) on the left.
macro_rules! impl_column_binary_operator {
    ($trait: ident, $method: ident, $tag: ident, $lhs: ty) => {
        impl<L: Clone, R: Clone> std::ops::$trait<&crate::Column<R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: &crate::Column<R>) -> Self::Output {
                self.broadcast_binary::<crate::algebra::$tag, R, _>(rhs)
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<crate::Column<R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::Column<R>) -> Self::Output {
                self.broadcast_binary::<crate::algebra::$tag, R, _>(&rhs)
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<crate::Nullable<R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::Nullable<R>) -> Self::Output {
                self.broadcast_binary::<crate::algebra::$tag, R, _>(&rhs)
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<crate::ElementRef<'_, R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::ElementRef<'_, R>) -> Self::Output {
                self.broadcast_binary::<crate::algebra::$tag, R, _>(&rhs)
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<&crate::ElementMut<'_, R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: &crate::ElementMut<'_, R>) -> Self::Output {
                self.broadcast_binary::<crate::algebra::$tag, R, _>(rhs)
            }
        }

        impl<L> std::ops::$trait<crate::NullValue> for $lhs {
            type Output = crate::Column<L>;
            fn $method(self, _: crate::NullValue) -> Self::Output {
                crate::Column::nulls(self.len())
            }
        }
    };
}

// Element handle on the left: read the slot, then
// combine as a Nullable would.
macro_rules! impl_element_binary_operator {
    ($trait: ident, $method: ident, $tag: ident, $lhs: ty) => {
        impl<L: Clone, R> std::ops::$trait<crate::Nullable<R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Nullable<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::Nullable<R>) -> Self::Output {
                self.get().apply_binary::<crate::algebra::$tag, R>(rhs)
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<crate::ElementRef<'_, R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Nullable<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::ElementRef<'_, R>) -> Self::Output {
                self.get().apply_binary::<crate::algebra::$tag, R>(rhs.get())
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<&crate::ElementMut<'_, R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Nullable<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: &crate::ElementMut<'_, R>) -> Self::Output {
                self.get().apply_binary::<crate::algebra::$tag, R>(rhs.get())
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<&crate::Column<R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: &crate::Column<R>) -> Self::Output {
                let lhs = self.get();
                rhs.map(|slot| lhs.clone().apply_binary::<crate::algebra::$tag, R>(slot))
            }
        }

        impl<L: Clone, R: Clone> std::ops::$trait<crate::Column<R>> for $lhs
        where
            crate::algebra::$tag: crate::algebra::BinaryOperator<L, R>,
        {
            type Output = crate::Column<
                <crate::algebra::$tag as crate::algebra::BinaryOperator<L, R>>::Output,
            >;
            fn $method(self, rhs: crate::Column<R>) -> Self::Output {
                let lhs = self.get();
                rhs.map(|slot| lhs.clone().apply_binary::<crate::algebra::$tag, R>(slot))
            }
        }

        impl<L> std::ops::$trait<crate::NullValue> for $lhs {
            type Output = crate::Nullable<L>;
            fn $method(self, _: crate::NullValue) -> Self::Output {
                crate::Nullable::Null
            }
        }
    };
}

// Impls where one operand is a primitive scalar.
// These name concrete types so that an unsuffixed literal
// takes the element type of the other operand.
macro_rules! impl_scalar_operator {
    ($trait: ident, $method: ident, $tag: ident, $($t: ty),*) => {
        $(
            impl std::ops::$trait<$t> for crate::Nullable<$t> {
                type Output = crate::Nullable<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: $t) -> Self::Output {
                    self.apply_binary::<crate::algebra::$tag, $t>(crate::Nullable::Value(rhs))
                }
            }

            impl std::ops::$trait<crate::Nullable<$t>> for $t {
                type Output = crate::Nullable<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: crate::Nullable<$t>) -> Self::Output {
                    crate::Nullable::Value(self).apply_binary::<crate::algebra::$tag, $t>(rhs)
                }
            }

            impl std::ops::$trait<$t> for crate::ElementRef<'_, $t> {
                type Output = crate::Nullable<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: $t) -> Self::Output {
                    self.get().apply_binary::<crate::algebra::$tag, $t>(crate::Nullable::Value(rhs))
                }
            }

            impl std::ops::$trait<crate::ElementRef<'_, $t>> for $t {
                type Output = crate::Nullable<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: crate::ElementRef<'_, $t>) -> Self::Output {
                    crate::Nullable::Value(self).apply_binary::<crate::algebra::$tag, $t>(rhs.get())
                }
            }

            impl std::ops::$trait<$t> for &crate::ElementMut<'_, $t> {
                type Output = crate::Nullable<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: $t) -> Self::Output {
                    self.get().apply_binary::<crate::algebra::$tag, $t>(crate::Nullable::Value(rhs))
                }
            }

            impl std::ops::$trait<&crate::ElementMut<'_, $t>> for $t {
                type Output = crate::Nullable<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: &crate::ElementMut<'_, $t>) -> Self::Output {
                    crate::Nullable::Value(self).apply_binary::<crate::algebra::$tag, $t>(rhs.get())
                }
            }

            impl std::ops::$trait<$t> for &crate::Column<$t> {
                type Output = crate::Column<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: $t) -> Self::Output {
                    self.broadcast_binary::<crate::algebra::$tag, $t, $t>(&rhs)
                }
            }

            impl std::ops::$trait<$t> for crate::Column<$t> {
                type Output = crate::Column<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: $t) -> Self::Output {
                    self.broadcast_binary::<crate::algebra::$tag, $t, $t>(&rhs)
                }
            }

            impl std::ops::$trait<&crate::Column<$t>> for $t {
                type Output = crate::Column<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: &crate::Column<$t>) -> Self::Output {
                    rhs.map(|slot| {
                        crate::Nullable::Value(self).apply_binary::<crate::algebra::$tag, $t>(slot)
                    })
                }
            }

            impl std::ops::$trait<crate::Column<$t>> for $t {
                type Output = crate::Column<<$t as std::ops::$trait>::Output>;
                fn $method(self, rhs: crate::Column<$t>) -> Self::Output {
                    <$t as std::ops::$trait<&crate::Column<$t>>>::$method(self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_equality {
    ($($t: ty),*) => {
        $(
            impl PartialEq<$t> for crate::Nullable<$t> {
                fn eq(&self, other: &$t) -> bool {
                    matches!(self, crate::Nullable::Value(v) if v == other)
                }
            }

            impl PartialEq<crate::Nullable<$t>> for $t {
                fn eq(&self, other: &crate::Nullable<$t>) -> bool {
                    other == self
                }
            }

            impl PartialEq<$t> for crate::ElementRef<'_, $t> {
                fn eq(&self, other: &$t) -> bool {
                    self.get() == *other
                }
            }

            impl PartialEq<$t> for crate::ElementMut<'_, $t> {
                fn eq(&self, other: &$t) -> bool {
                    self.get() == *other
                }
            }
        )*
    };
}
