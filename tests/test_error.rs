use nullcolumn::*;

#[cfg(test)]
mod test {

    use super::*;

    fn mock_error() -> ColumnResult<Nullable<i32>> {
        Column::<i32>::new().back()
    }

    fn mock_success() -> ColumnResult<Nullable<i32>> {
        Column::from(vec![1]).back()
    }

    #[test]
    fn test_error_formatting() {
        let x = mock_error();
        let mut s: String = "nope!".to_string();
        x.map_or_else(|e: ColumnError| s = format!("{}", e), |_| ());
        assert_eq!(s, "column is empty");
    }

    #[test]
    fn test_extract_error_message() {
        let x = mock_error();
        match error::extract_error_message(x) {
            Some(s) => assert_eq!(s, "column is empty"),
            None => panic!(),
        }

        if error::extract_error_message(mock_success()).is_some() {
            panic!();
        }
    }

    #[test]
    fn test_index_error_message() {
        let column = Column::from(vec![1, 2]);
        let e = column.try_at(2).unwrap_err();
        assert_eq!(format!("{}", e), "index 2 out of range for column of length 2");
    }

    fn sum_first_and_last(column: &Column<i32>) -> anyhow::Result<i32> {
        let first = column.front()?.try_value()?;
        let last = column.back()?.try_value()?;
        Ok(first + last)
    }

    #[test]
    fn test_anyhow_compatibility() {
        assert_eq!(sum_first_and_last(&Column::from(vec![1, 2, 3])).unwrap(), 4);
        let e = sum_first_and_last(&Column::new()).unwrap_err();
        assert_eq!(
            e.downcast_ref::<ColumnError>(),
            Some(&ColumnError::EmptyColumn)
        );
        let mut column = Column::from(vec![1]);
        column.reset(0);
        assert!(sum_first_and_last(&column).is_err());
    }
}
