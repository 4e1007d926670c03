use nullcolumn::*;
use std::sync::Arc;
use std::thread;

#[test]
fn build_arc() {
    let mut column = Column::from(vec![1_u64, 2, 3]);
    column.reset(1);
    let a = Arc::new(column);
    let b = Arc::clone(&a);
    let join_handle = thread::spawn(move || (&*b * 2).null_count());
    let nulls = join_handle.join().unwrap();
    assert_eq!(nulls, 1);
    assert_eq!(a.len(), 3);
}

#[test]
fn move_into_thread() {
    let column = Column::from(vec![1.5_f64, 2.5]);
    let join_handle = thread::spawn(move || {
        let mut column = column;
        column.assign(0.0);
        column
    });
    let column = join_handle.join().unwrap();
    assert_eq!(column, Column::from(vec![0.0, 0.0]));
}
