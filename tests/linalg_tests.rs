use forecast_blend::numeric::linalg::{matmul, matvec, solve, transpose};

#[test]
fn solve_handles_zero_leading_pivot_via_row_swap() {
    // Without partial pivoting the first elimination step would divide by
    // zero; with it the rows swap and the system solves cleanly.
    let a = vec![vec![0.0, 2.0], vec![3.0, 1.0]];
    let b = vec![4.0, 5.0];
    let x = solve(&a, &b);
    assert!((x[0] - 1.0).abs() < 1e-10);
    assert!((x[1] - 2.0).abs() < 1e-10);
}

#[test]
fn solve_three_by_three() {
    let a = vec![
        vec![2.0, 1.0, -1.0],
        vec![-3.0, -1.0, 2.0],
        vec![-2.0, 1.0, 2.0],
    ];
    let b = vec![8.0, -11.0, -3.0];
    let x = solve(&a, &b);
    assert!((x[0] - 2.0).abs() < 1e-9);
    assert!((x[1] - 3.0).abs() < 1e-9);
    assert!((x[2] + 1.0).abs() < 1e-9);
}

#[test]
fn matmul_and_matvec_agree() {
    let a = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
    let v = vec![7.0, 8.0];
    let as_matrix = matmul(&a, &[vec![7.0], vec![8.0]]);
    let as_vector = matvec(&a, &v);
    for (row, &value) in as_matrix.iter().zip(&as_vector) {
        assert!((row[0] - value).abs() < 1e-12);
    }
}

#[test]
fn transpose_of_transpose_is_identity() {
    let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    assert_eq!(transpose(&transpose(&m)), m);
}
