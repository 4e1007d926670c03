//! Export commonly-use types and traits

pub use {
    crate::Broadcast, crate::CheckedArithmetic, crate::Column, crate::ColumnError,
    crate::ColumnResult, crate::ElementMut, crate::ElementRef, crate::NullValue, crate::Nullable,
    crate::NullableElement, crate::SlotIndex, crate::Truthy, crate::NULL,
};
