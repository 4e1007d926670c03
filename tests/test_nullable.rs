use nullcolumn::*;

macro_rules! check_binary_operator {
    ($op: tt, $t: ty, $lhs: expr, $rhs: expr, $expected: expr) => {
        let lhs = Nullable::<$t>::Value($lhs);
        let rhs = Nullable::<$t>::Value($rhs);
        let null = Nullable::<$t>::Null;
        assert_eq!(lhs $op rhs, $expected);
        assert_eq!(lhs $op $rhs, $expected);
        assert_eq!($lhs $op rhs, $expected);
        assert!((lhs $op null).is_null());
        assert!((null $op rhs).is_null());
        assert!((lhs $op NULL).is_null());
        assert!((NULL $op rhs).is_null());
    };
}

#[test]
fn test_null_propagation_for_every_binary_operator() {
    check_binary_operator!(+, i32, 7, 2, 9);
    check_binary_operator!(-, i32, 7, 2, 5);
    check_binary_operator!(*, i32, 7, 2, 14);
    check_binary_operator!(/, i32, 7, 2, 3);
    check_binary_operator!(%, i32, 7, 2, 1);
    check_binary_operator!(&, u16, 7, 2, 2);
    check_binary_operator!(|, u16, 5, 2, 7);
    check_binary_operator!(^, u16, 7, 2, 5);
    check_binary_operator!(+, f32, 0.5, 0.25, 0.75);
    check_binary_operator!(&, bool, true, false, false);
}

#[test]
fn test_null_propagation_for_comparisons() {
    let three = Nullable::Value(3_i32);
    let null = Nullable::<i32>::Null;
    for result in [
        three.gt(null),
        three.lt(null),
        three.gt_eq(null),
        three.lt_eq(null),
        null.gt(3),
        null.lt(3),
        null.gt_eq(3),
        null.lt_eq(3),
    ] {
        assert!(result.is_null());
    }
    assert_eq!(three.gt_eq(3), true);
    assert_eq!(three.lt(3), false);
}

#[test]
fn test_null_literal_as_method_operand() {
    let big = Nullable::Value(1_u64 << 40);
    assert!(big.gt(NULL).is_null());
    assert!(big.lt_eq(NULL).is_null());
    assert!(big.and(NULL).is_null());
    assert!(!big.equal(NULL));
    assert!(Nullable::<u64>::Null.equal(NULL));
    assert_eq!(big.gt(1), true);
    assert_eq!(big * 2, 1_u64 << 41);
}

#[test]
fn test_null_propagation_for_unary_operators() {
    let null = Nullable::<i64>::Null;
    assert!((-null).is_null());
    assert!((!null).is_null());
    assert!(null.pos().is_null());
    assert!(null.logical_not().is_null());
    assert_eq!(-Nullable::Value(2_i64), -2);
    assert_eq!(!Nullable::Value(false), true);
}

#[test]
fn test_equality_exceptions() {
    let null = Nullable::<i32>::Null;
    assert!(null == Nullable::Null);
    assert!(!(null == 5));
    assert!(5 != null);
    assert!(null != Nullable::Value(5));
    assert!(null == NULL);
    assert!(NULL == null);
    assert!(Nullable::Value(5_i32) != NULL);
    assert!(Nullable::Value(5_i32) == 5);
}

#[test]
fn test_non_numeric_payloads() {
    let a = Nullable::Value(String::from("ab"));
    let b = Nullable::Value(String::from("cd"));
    assert!(Nullable::Value("ab").lt("cd").value_or(false));
    assert!(a.equal(a.clone()));
    assert!(a.not_equal(b.clone()));
    assert!(a.not_equal(NULL));
    assert_eq!(a.map(|s| s + "!"), Nullable::Value("ab!".to_string()));
}

#[test]
fn test_try_value_error() {
    let e = Nullable::<u8>::Null.try_value().unwrap_err();
    assert_eq!(
        e,
        ColumnError::ValueError {
            got: "Null".to_string(),
            expected: "a value".to_string()
        }
    );
    assert_eq!(format!("{}", e), "we received Null but expected a value");
}
