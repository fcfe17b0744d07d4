pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_set_get() {
    let mut m = Matrix::zeros(2, 2);
    m.set(1, 0, 7.5);
    assert!((m.get(1, 0) - 7.5).abs() < 1e-6);
    assert!((m.get(0, 0)).abs() < 1e-6);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let r = m.row(1);
    assert_eq!(r.as_slice(), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_row_slice_no_copy() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    assert_eq!(m.row_slice(0), &[1.0, 2.0]);
    assert_eq!(m.row_slice(1), &[3.0, 4.0]);
}

#[test]
fn test_sum_rows() {
    let m = Matrix::from_vec(3, 2, vec![1.0, 0.0, 2.0, 1.0, 0.0, 4.0]).expect("valid");
    let summed = m.sum_rows(&[0, 2]);
    assert_eq!(summed.as_slice(), &[1.0, 4.0]);

    let all = m.sum_rows(&[0, 1, 2]);
    assert_eq!(all.as_slice(), &[3.0, 5.0]);
}

#[test]
fn test_sum_rows_empty() {
    let m = Matrix::zeros(2, 3);
    let summed = m.sum_rows(&[]);
    assert!(summed.is_zero());
    assert_eq!(summed.len(), 3);
}
