use nullcolumn::*;

#[test]
fn test_reads_follow_the_column() {
    let mut column = Column::from(vec![1_i32, 2, 3]);
    column.set(1, 20);
    let e = column.element(1);
    assert_eq!(e.get(), 20);
    assert_eq!(e.index(), Some(1));
    assert!(e.has_value());
    assert_eq!(format!("{}", e), "20");
}

#[test]
fn test_writes_go_to_the_column() {
    let mut column = Column::from(vec![1_i32, 2, 3]);
    {
        let mut e = column.element_mut(2);
        assert!(e.assign(30));
        assert_eq!(e, Nullable::Value(30));
        assert_eq!(e, 30);
    }
    assert_eq!(column.at(2), 30);
    {
        let mut e = column.element_mut(0);
        assert!(e.assign_null());
        assert_eq!(format!("{}", e), "Null");
    }
    assert_eq!(format!("{}", column), "Null\n2\n30\n");
}

#[test]
fn test_out_of_range_handles() {
    let mut column = Column::from(vec![1.0_f64]);
    let e = column.element(5);
    assert_eq!(e.get(), Nullable::Null);
    assert_eq!(e.value(), None);
    assert!(e.try_value().is_err());
    let mut e = column.element_mut(5);
    assert!(!e.assign(2.0));
    assert_eq!(column.len(), 1);
}

#[test]
fn test_handles_in_expressions() {
    let mut column = Column::from(vec![4_i32, 5]);
    column.push_null();
    let a = column.element(0);
    let b = column.element(1);
    let n = column.element(2);
    assert_eq!(a + b, 9);
    assert_eq!(b - 1, 4);
    assert_eq!(10 - b, 5);
    assert_eq!(-a, -4);
    assert!((a * n).is_null());
    assert!((n + 1).is_null());
    assert!((a + NULL).is_null());
    assert_eq!(b * &column, Column::from_nullables([
        Nullable::Value(20_i32),
        Nullable::Value(25),
        Nullable::Null
    ]));
    assert_eq!((&column + a).at(1), 9);
}

#[test]
fn test_mut_handle_in_expressions() {
    let mut column = Column::from(vec![6_i32, 7]);
    let mut e = column.element_mut(1);
    assert_eq!(&e * 2, 14);
    assert_eq!(-&e, -7);
    e.assign(8);
    assert_eq!(&e % 3, 2);
    assert_eq!(e.as_ref().get(), 8);
}

#[test]
fn test_null_literal_assignment() {
    let mut column = Column::from(vec![1_u32, 2]);
    assert!(column.element_mut(0).assign(NULL));
    assert!(!column.element_mut(9).assign(NULL));
    assert_eq!(format!("{}", column), "Null\n2\n");
}

#[test]
fn test_nullable_methods_through_handles() {
    let mut column = Column::from(vec![2_u64, 0]);
    column.push_null();
    let two = column.element(0);
    let zero = column.element(1);
    let null = column.element(2);
    assert_eq!(two.pos(), 2);
    assert_eq!(zero.logical_not(), true);
    assert_eq!(two.gt(1), true);
    assert_eq!(two.lt(zero.get()), false);
    assert!(two.gt_eq(NULL).is_null());
    assert!(null.lt_eq(2).is_null());
    assert_eq!(two.and(zero.get()), false);
    assert_eq!(two.or(zero.get()), true);
    assert!(null.equal(NULL));
    assert!(two.not_equal(zero.get()));

    let mut e = column.element_mut(2);
    assert!(e.logical_not().is_null());
    e.assign(5);
    assert_eq!(e.gt(2), true);
    assert_eq!(e.pos(), 5);
}
