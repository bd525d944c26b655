#[cfg(test)]
mod _tests_matrix {
    use super::super::matrix::*;
    use crate::errors::MatrixError;

    #[test]
    fn test_parse_shape_basic() {
        let shape: MatrixShape = "2x3".parse().unwrap();
        assert_eq!(shape, MatrixShape::new(2, 3));
    }

    #[test]
    fn test_parse_shape_case_and_whitespace() {
        assert_eq!(" 2 X 3 ".parse::<MatrixShape>().unwrap(), MatrixShape::new(2, 3));
        assert_eq!("10x\t1".parse::<MatrixShape>().unwrap(), MatrixShape::new(10, 1));
    }

    #[test]
    fn test_parse_shape_rejects_malformed() {
        for input in ["2x", "axb", "2x3x4", "23", "", "x", "-1x2", "2.5x3"] {
            assert!(
                matches!(input.parse::<MatrixShape>(), Err(MatrixError::InvalidFormat(_))),
                "'{}' should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_shape_rejects_zero_dimension() {
        assert!(matches!("0x2".parse::<MatrixShape>(), Err(MatrixError::InvalidFormat(_))));
        assert!(matches!("2x0".parse::<MatrixShape>(), Err(MatrixError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_shape_rejects_overflowing_entry_count() {
        let huge = format!("{}x2", usize::MAX);
        assert!(matches!(huge.parse::<MatrixShape>(), Err(MatrixError::InvalidFormat(_))));

        let too_many_digits = "99999999999999999999999x1";
        assert!(matches!(
            too_many_digits.parse::<MatrixShape>(),
            Err(MatrixError::InvalidFormat(_))
        ));

        assert_eq!(
            format!("{}x1", usize::MAX).parse::<MatrixShape>().unwrap(),
            MatrixShape::new(usize::MAX, 1)
        );
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(MatrixShape::new(4, 1).to_string(), "4x1");
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        assert_eq!(m.shape(), MatrixShape::new(2, 3));
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, MatrixError::RowLengthMismatch { expected: 2, found: 1 });
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(Matrix::from_rows(&[]), Err(MatrixError::InvalidFormat(_))));
        assert!(matches!(Matrix::from_rows(&[vec![]]), Err(MatrixError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(parse_row(" 1  -2.5 3e2 ", 3).unwrap(), vec![1.0, -2.5, 300.0]);
    }

    #[test]
    fn test_parse_row_wrong_count() {
        let err = parse_row("1 2", 3).unwrap_err();
        assert_eq!(err, MatrixError::RowLengthMismatch { expected: 3, found: 2 });
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_parse_row_non_numeric() {
        let err = parse_row("1 two 3", 3).unwrap_err();
        assert_eq!(err, MatrixError::InvalidNumber("two".to_string()));
        assert!(err.is_recoverable());
    }
}
