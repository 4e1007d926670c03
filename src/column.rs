use log::{debug, trace};

use crate::algebra::{
    BinaryOperator, Greater, GreaterEqual, Identity, Less, LessEqual, LogicalAnd, LogicalNot,
    LogicalOr,
};
use crate::Broadcast;
use crate::CheckedArithmetic;
use crate::ColumnError;
use crate::ColumnResult;
use crate::ElementMut;
use crate::ElementRef;
use crate::Nullable;
use crate::SlotIndex;
use crate::Truthy;

/// An ordered sequence of nullable slots.
///
/// # Bounds
///
/// Reads past the end of a column are not errors:
/// [`Column::at`] returns [`Nullable::Null`].
/// Writes past the end are ignored and reported by
/// the `bool` returned from [`Column::set`] and [`Column::reset`].
///
/// # Operators
///
/// Unary and binary operators return a new column and never
/// modify their operands.
/// `!` follows [`std::ops::Not`] and is bitwise on integer columns;
/// use [`Column::logical_not`] for a `bool` column.
/// Combining two columns of different lengths gives a column as
/// long as the longer one, with null wherever the shorter one has
/// no slot:
///
/// ```
/// use nullcolumn::{Column, Nullable, NULL};
///
/// let a = Column::from(vec![1_i32, 2, 3]);
/// let b = Column::from(vec![10, 20]);
/// let c = &a * &b;
/// assert_eq!(c.len(), 3);
/// assert_eq!(c.at(0), 10);
/// assert_eq!(c.at(1), 40);
/// assert_eq!(c.at(2), Nullable::Null);
///
/// // Scalars are broadcast
/// assert_eq!(&a + 1, Column::from(vec![2, 3, 4]));
/// assert_eq!(2 * &a, Column::from(vec![2, 4, 6]));
/// assert_eq!((&a * NULL).null_count(), 3);
///
/// // A bare literal takes the element type of the column
/// let big = Column::from(vec![1_u64 << 40]);
/// assert_eq!((&big * 2).at(0), 1_u64 << 41);
/// ```
///
/// # Display
///
/// One line per slot:
///
/// ```
/// use nullcolumn::Column;
///
/// let mut column = Column::from(vec![1, 2]);
/// column.reset(0);
/// assert_eq!(format!("{}", column), "Null\n2\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, std::hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Column<T> {
    slots: Vec<Nullable<T>>,
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Column<T> {
    /// An empty column
    pub fn new() -> Self {
        Self { slots: vec![] }
    }

    /// Create a column with every value present.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().map(Nullable::Value).collect()
    }

    /// Create a column from values that may already be absent.
    ///
    /// ```
    /// use nullcolumn::{Column, Nullable};
    ///
    /// let column = Column::from_nullables([Nullable::Value(1), Nullable::Null]);
    /// assert_eq!(column.len(), 2);
    /// assert_eq!(column.null_count(), 1);
    /// ```
    pub fn from_nullables<I: IntoIterator<Item = Nullable<T>>>(values: I) -> Self {
        Self {
            slots: values.into_iter().collect(),
        }
    }

    /// A column of `len` null slots
    pub fn nulls(len: usize) -> Self {
        Self::from_nullables(std::iter::repeat_with(|| Nullable::Null).take(len))
    }

    fn position<I: SlotIndex>(&self, index: I) -> Option<usize> {
        index.to_position().filter(|&i| i < self.slots.len())
    }

    /// The value at `index`.
    ///
    /// Returns [`Nullable::Null`] if `index` is out of range.
    pub fn at<I: SlotIndex>(&self, index: I) -> Nullable<T>
    where
        T: Clone,
    {
        match self.position(index) {
            Some(i) => self.slots[i].clone(),
            None => Nullable::Null,
        }
    }

    /// The value at `index`.
    ///
    /// # Errors
    ///
    /// [`ColumnError::IndexError`] if `index` is out of range.
    pub fn try_at<I: SlotIndex>(&self, index: I) -> ColumnResult<Nullable<T>>
    where
        T: Clone,
    {
        match self.position(index) {
            Some(i) => Ok(self.slots[i].clone()),
            None => Err(ColumnError::IndexError {
                index: index.to_string(),
                len: self.len(),
            }),
        }
    }

    /// Reference to the slot at `index`, if in range.
    pub fn get<I: SlotIndex>(&self, index: I) -> Option<&Nullable<T>> {
        self.position(index).map(|i| &self.slots[i])
    }

    /// The first slot.
    ///
    /// # Errors
    ///
    /// [`ColumnError::EmptyColumn`] if there are no slots.
    pub fn front(&self) -> ColumnResult<Nullable<T>>
    where
        T: Clone,
    {
        self.slots.first().cloned().ok_or(ColumnError::EmptyColumn)
    }

    /// The last slot.
    ///
    /// # Errors
    ///
    /// [`ColumnError::EmptyColumn`] if there are no slots.
    pub fn back(&self) -> ColumnResult<Nullable<T>>
    where
        T: Clone,
    {
        self.slots.last().cloned().ok_or(ColumnError::EmptyColumn)
    }

    /// Number of slots, whether null or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Alias of [`Column::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Alias of [`Column::is_empty`].
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// The largest number of slots a column of this
    /// element type can hold.
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / std::mem::size_of::<Nullable<T>>().max(1)
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Reserve capacity for at least `new_capacity` slots in total.
    /// Length and content are unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.slots
            .reserve(new_capacity.saturating_sub(self.slots.len()));
    }

    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit()
    }

    /// Remove all slots.
    pub fn clear(&mut self) {
        trace!("clearing column of length {}", self.slots.len());
        self.slots.clear()
    }

    /// Number of null slots.
    pub fn null_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_null()).count()
    }

    /// Append a slot.
    pub fn push(&mut self, value: impl Into<Nullable<T>>) {
        self.slots.push(value.into())
    }

    /// Append a null slot.
    pub fn push_null(&mut self) {
        self.slots.push(Nullable::Null)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Nullable<T>> {
        self.slots.iter()
    }

    /// View the underlying slots
    pub fn as_slice(&self) -> &[Nullable<T>] {
        &self.slots
    }

    pub(crate) fn set_position(&mut self, position: Option<usize>, value: Nullable<T>) -> bool {
        match position.filter(|&i| i < self.slots.len()) {
            Some(i) => {
                self.slots[i] = value;
                true
            }
            None => {
                debug!(
                    "ignoring write to index {:?} of column of length {}",
                    position,
                    self.slots.len()
                );
                false
            }
        }
    }

    /// Overwrite the slot at `index`.
    ///
    /// Returns `false`, leaving the column unchanged,
    /// if `index` is out of range.
    ///
    /// ```
    /// use nullcolumn::{Column, Nullable, NULL};
    ///
    /// let mut column = Column::from(vec![1_i32, 2, 3]);
    /// assert!(column.set(0, 100));
    /// assert!(column.set(1, Nullable::Null));
    /// assert!(column.set(2, NULL));
    /// assert!(!column.set(10, 99));
    /// assert_eq!(format!("{}", column), "100\nNull\nNull\n");
    /// ```
    pub fn set<I: SlotIndex>(&mut self, index: I, value: impl Into<Nullable<T>>) -> bool {
        self.set_position(index.to_position(), value.into())
    }

    /// Make the slot at `index` null.
    ///
    /// Returns `false`, leaving the column unchanged,
    /// if `index` is out of range.
    pub fn reset<I: SlotIndex>(&mut self, index: I) -> bool {
        self.set_position(index.to_position(), Nullable::Null)
    }

    /// Alias of [`Column::reset`].
    pub fn set_null<I: SlotIndex>(&mut self, index: I) -> bool {
        self.reset(index)
    }

    /// Overwrite every slot with `value`.
    /// The length is unchanged.
    ///
    /// ```
    /// use nullcolumn::Column;
    ///
    /// let mut column = Column::from(vec![1, 2, 3]);
    /// column.assign(0);
    /// assert_eq!(column, Column::from(vec![0, 0, 0]));
    /// ```
    pub fn assign(&mut self, value: T)
    where
        T: Clone,
    {
        trace!("assigning a value to {} slots", self.slots.len());
        self.slots.fill(Nullable::Value(value))
    }

    /// Make every slot null.
    /// The length is unchanged.
    pub fn assign_null(&mut self) {
        trace!("assigning null to {} slots", self.slots.len());
        self.slots.iter_mut().for_each(|s| *s = Nullable::Null)
    }

    /// Handle to the slot at `index`.
    ///
    /// No bounds checking happens here.
    /// Reads through the handle return null if
    /// `index` is out of range.
    pub fn element<I: SlotIndex>(&self, index: I) -> ElementRef<'_, T> {
        ElementRef::new(self, index.to_position())
    }

    /// Mutable handle to the slot at `index`.
    ///
    /// No bounds checking happens here.
    /// Writes through the handle are ignored if
    /// `index` is out of range.
    ///
    /// ```
    /// use nullcolumn::Column;
    ///
    /// let mut column = Column::from(vec![1, 2]);
    /// let mut e = column.element_mut(1);
    /// assert!(e.assign(5));
    /// assert_eq!(e.get(), 5);
    /// assert_eq!(column.at(1), 5);
    /// ```
    pub fn element_mut<I: SlotIndex>(&mut self, index: I) -> ElementMut<'_, T> {
        ElementMut::new(self, index.to_position())
    }

    /// A new column from applying `f` to each slot.
    pub fn map<U, F>(&self, f: F) -> Column<U>
    where
        T: Clone,
        F: FnMut(Nullable<T>) -> Nullable<U>,
    {
        self.slots.iter().cloned().map(f).collect()
    }

    /// A new column from applying `f` to each pair of slots.
    ///
    /// The result is as long as the longer column.
    /// The shorter column contributes null past its end.
    pub fn zip_with<U, R, F>(&self, rhs: &Column<U>, f: F) -> Column<R>
    where
        T: Clone,
        U: Clone,
        F: FnMut(Nullable<T>, Nullable<U>) -> Nullable<R>,
    {
        self.zip_broadcast::<U, _, R, F>(rhs, f)
    }

    pub(crate) fn zip_broadcast<U, B, R, F>(&self, rhs: &B, mut f: F) -> Column<R>
    where
        T: Clone,
        B: Broadcast<U> + ?Sized,
        F: FnMut(Nullable<T>, Nullable<U>) -> Nullable<R>,
    {
        let len = match rhs.slot_count() {
            Some(n) => {
                if n != self.len() {
                    trace!(
                        "null-padding column operands of lengths {} and {}",
                        self.len(),
                        n
                    );
                }
                self.len().max(n)
            }
            None => self.len(),
        };
        (0..len).map(|i| f(self.at(i), rhs.slot(i))).collect()
    }

    pub(crate) fn broadcast_binary<K, U, B>(&self, rhs: &B) -> Column<K::Output>
    where
        T: Clone,
        B: Broadcast<U> + ?Sized,
        K: BinaryOperator<T, U>,
    {
        self.zip_broadcast(rhs, |l, r| l.apply_binary::<K, U>(r))
    }

    /// Unary plus.
    pub fn pos(&self) -> Column<T>
    where
        T: Clone,
    {
        self.map(|s| s.apply_unary::<Identity>())
    }

    /// Logical negation of each slot.
    ///
    /// ```
    /// use nullcolumn::{Column, Nullable};
    ///
    /// let mut column = Column::from(vec![0_i32, 2]);
    /// column.push_null();
    /// let negated = column.logical_not();
    /// assert_eq!(
    ///     negated,
    ///     Column::from_nullables([Nullable::Value(true), Nullable::Value(false), Nullable::Null])
    /// );
    /// ```
    pub fn logical_not(&self) -> Column<bool>
    where
        T: Clone + Truthy,
    {
        self.map(|s| s.apply_unary::<LogicalNot>())
    }

    /// Slot-wise equality. Every slot of the result is present.
    ///
    /// ```
    /// use nullcolumn::{Column, NULL};
    ///
    /// let mut a = Column::from(vec![1_i32, 2]);
    /// a.reset(1);
    /// let eq = a.equal(&Column::from(vec![1]));
    /// // past the end of the shorter column, null == null
    /// assert_eq!(eq, Column::from(vec![true, true]));
    /// assert_eq!(a.equal(NULL), Column::from(vec![false, true]));
    /// ```
    pub fn equal<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + PartialEq,
        B: Broadcast<T>,
    {
        self.zip_broadcast(&rhs, |l, r| Nullable::Value(l.equal(r)))
    }

    /// Slot-wise inequality. Every slot of the result is present.
    pub fn not_equal<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + PartialEq,
        B: Broadcast<T>,
    {
        self.zip_broadcast(&rhs, |l, r| Nullable::Value(l.not_equal(r)))
    }

    pub fn gt<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + PartialOrd,
        B: Broadcast<T>,
    {
        self.broadcast_binary::<Greater, T, B>(&rhs)
    }

    pub fn lt<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + PartialOrd,
        B: Broadcast<T>,
    {
        self.broadcast_binary::<Less, T, B>(&rhs)
    }

    pub fn gt_eq<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + PartialOrd,
        B: Broadcast<T>,
    {
        self.broadcast_binary::<GreaterEqual, T, B>(&rhs)
    }

    pub fn lt_eq<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + PartialOrd,
        B: Broadcast<T>,
    {
        self.broadcast_binary::<LessEqual, T, B>(&rhs)
    }

    pub fn and<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + Truthy,
        B: Broadcast<T>,
    {
        self.broadcast_binary::<LogicalAnd, T, B>(&rhs)
    }

    pub fn or<B>(&self, rhs: B) -> Column<bool>
    where
        T: Clone + Truthy,
        B: Broadcast<T>,
    {
        self.broadcast_binary::<LogicalOr, T, B>(&rhs)
    }

    /// Slot-wise division giving null where
    /// the primitive operation would panic.
    pub fn checked_div<B>(&self, rhs: B) -> Column<T>
    where
        T: Clone + CheckedArithmetic,
        B: Broadcast<T>,
    {
        self.zip_broadcast(&rhs, |l, r| l.checked_div(r))
    }

    /// Slot-wise remainder giving null where
    /// the primitive operation would panic.
    pub fn checked_rem<B>(&self, rhs: B) -> Column<T>
    where
        T: Clone + CheckedArithmetic,
        B: Broadcast<T>,
    {
        self.zip_broadcast(&rhs, |l, r| l.checked_rem(r))
    }
}

impl<T> FromIterator<Nullable<T>> for Column<T> {
    fn from_iter<I: IntoIterator<Item = Nullable<T>>>(iter: I) -> Self {
        Self::from_nullables(iter)
    }
}

impl<T> From<Vec<T>> for Column<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T: Clone> From<&[T]> for Column<T> {
    fn from(values: &[T]) -> Self {
        Self::from_values(values.iter().cloned())
    }
}

impl<T> IntoIterator for Column<T> {
    type Item = Nullable<T>;
    type IntoIter = std::vec::IntoIter<Nullable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Column<T> {
    type Item = &'a Nullable<T>;
    type IntoIter = std::slice::Iter<'a, Nullable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<T> std::convert::AsRef<[Nullable<T>]> for Column<T> {
    fn as_ref(&self) -> &[Nullable<T>] {
        &self.slots
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            writeln!(f, "{}", slot)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NULL;

    #[test]
    fn test_out_of_range_read_is_null() {
        let column = Column::from(vec![1, 2, 3]);
        assert_eq!(column.at(3), Nullable::Null);
        assert_eq!(column.at(usize::MAX), Nullable::Null);
        assert_eq!(column.at(-1), Nullable::Null);
        assert!(column.get(3).is_none());
    }

    #[test]
    fn test_try_at() {
        let column = Column::from(vec![1]);
        assert_eq!(column.try_at(0), Ok(Nullable::Value(1)));
        assert_eq!(
            column.try_at(-2),
            Err(ColumnError::IndexError {
                index: "-2".to_string(),
                len: 1
            })
        );
    }

    #[test]
    fn test_front_back_policy() {
        let column = Column::<u8>::new();
        assert_eq!(column.front(), Err(ColumnError::EmptyColumn));
        assert_eq!(column.back(), Err(ColumnError::EmptyColumn));
        let column = Column::from(vec![4_u8, 5, 6]);
        assert_eq!(column.front(), Ok(Nullable::Value(4)));
        assert_eq!(column.back(), Ok(Nullable::Value(6)));
    }

    #[test]
    fn test_reserve_and_shrink_do_not_change_content() {
        let mut column = Column::from(vec![1, 2, 3]);
        column.reserve(20);
        assert!(column.capacity() >= 20);
        assert_eq!(column.len(), 3);
        column.shrink_to_fit();
        assert!(column.capacity() >= 3);
        assert_eq!(column, Column::from(vec![1, 2, 3]));
        assert!(column.max_size() >= column.len());
    }

    #[test]
    fn test_clear() {
        let mut column = Column::from(vec![1, 2, 3]);
        column.clear();
        assert!(column.is_empty());
        assert!(column.empty());
        assert_eq!(column.size(), 0);
        assert_eq!(format!("{}", column), "");
    }

    #[test]
    fn test_assign_null() {
        let mut column = Column::from(vec![1, 2, 3]);
        column.assign_null();
        assert_eq!(column.len(), 3);
        assert_eq!(column.null_count(), 3);
        assert_eq!(format!("{}", column), "Null\nNull\nNull\n");
    }

    #[test]
    fn test_nulls() {
        let column = Column::<String>::nulls(2);
        assert_eq!(column.len(), 2);
        assert_eq!(column.null_count(), 2);
    }

    #[test]
    fn test_push() {
        let mut column = Column::new();
        column.push(1_i32);
        column.push_null();
        column.push(Nullable::Value(3));
        assert_eq!(format!("{}", column), "1\nNull\n3\n");
    }

    #[test]
    fn test_checked_division() {
        let column = Column::from(vec![6_i32, 7, 8]);
        let divisor = Column::from(vec![2_i32, 0]);
        let q = column.checked_div(&divisor);
        assert_eq!(
            q,
            Column::from_nullables([Nullable::Value(3), Nullable::Null, Nullable::Null])
        );
        let r = column.checked_rem(4);
        assert_eq!(r, Column::from(vec![2, 3, 0]));
    }

    #[test]
    fn test_null_literal_writes() {
        let mut column = Column::from(vec![1_u16, 2, 3]);
        assert!(column.set(0, NULL));
        column.push(NULL);
        assert!(column.element_mut(1).assign(NULL));
        assert!(!column.set(9, NULL));
        assert_eq!(column.len(), 4);
        assert_eq!(column.null_count(), 3);
        assert_eq!(column.at(2), 3);
    }

    #[test]
    fn test_null_literal_in_methods() {
        let mut column = Column::from(vec![1_i64, 0]);
        column.push_null();
        assert_eq!(column.equal(NULL), Column::from(vec![false, false, true]));
        assert_eq!(column.not_equal(NULL), Column::from(vec![true, true, false]));
        assert_eq!(column.gt(NULL), Column::nulls(3));
        assert_eq!(column.lt_eq(NULL), Column::nulls(3));
        assert_eq!(column.and(NULL), Column::nulls(3));
        assert_eq!(column.or(NULL), Column::nulls(3));
        assert_eq!(column.checked_div(NULL), Column::nulls(3));
    }

    #[test]
    fn test_bare_literal_takes_element_type() {
        let column = Column::from(vec![3_u64, 4]);
        assert_eq!(column.gt(3), Column::from(vec![false, true]));
        assert_eq!(column.equal(4), Column::from(vec![false, true]));
        assert_eq!(column.checked_div(0), Column::nulls(2));
        let column = Column::from(vec![1_i8, 0]);
        assert_eq!(column.and(1), Column::from(vec![true, false]));
    }
}
