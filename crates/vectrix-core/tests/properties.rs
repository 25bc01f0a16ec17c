//! Algebraic properties that must hold for arbitrary inputs.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use vectrix_core::linalg::rank;
use vectrix_core::{Matrix, Vector};

fn pair(dim: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (
        prop::collection::vec(-100.0f64..100.0, dim),
        prop::collection::vec(-100.0f64..100.0, dim),
    )
}

fn same_dim_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..8).prop_flat_map(pair)
}

fn grid() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(m, n)| {
        (
            Just(m),
            Just(n),
            prop::collection::vec(-10.0f64..10.0, m * n),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn additive_inverse((a, b) in same_dim_pair()) {
        let a = Vector::new(&a).unwrap();
        let b = Vector::new(&b).unwrap();
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        for (x, y) in back.iter().zip(a.iter()) {
            prop_assert!((x - y).abs() < 1e-9, "{} != {}", x, y);
        }
    }

    #[test]
    fn dot_is_symmetric((a, b) in same_dim_pair()) {
        let a = Vector::new(&a).unwrap();
        let b = Vector::new(&b).unwrap();
        prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }

    #[test]
    fn cross_is_anticommutative((a, b) in pair(3)) {
        let a = Vector::new(&a).unwrap();
        let b = Vector::new(&b).unwrap();
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap().multiply_scalar(-1.0);
        for (x, y) in ab.iter().zip(ba.iter()) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn normalized_has_unit_length(v in prop::collection::vec(-100.0f64..100.0, 1..8)) {
        let v = Vector::new(&v).unwrap();
        prop_assume!(v.magnitude() > 1e-6);
        let len = v.normalize().unwrap().magnitude();
        prop_assert!((len - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_is_bounded((m, n, data) in grid()) {
        let a = Matrix::from_vec(data, m, n).unwrap();
        prop_assert!(rank(&a) <= m.min(n));
    }

    #[test]
    fn inverse_round_trip(data in prop::collection::vec(-10.0f64..10.0, 9)) {
        let a = Matrix::from_vec(data, 3, 3).unwrap();
        prop_assume!(a.determinant().unwrap().abs() > 1e-2);
        let eye = a.inverse().unwrap().multiply(&a).unwrap();
        let expected = Matrix::identity(3).unwrap();
        for (x, y) in eye.as_slice().iter().zip(expected.as_slice()) {
            prop_assert!((x - y).abs() < 1e-6, "{} vs {}", x, y);
        }
    }
}

#[test]
fn cross_product_literal() {
    let x = Vector::new(&[1.0, 0.0, 0.0]).unwrap();
    let y = Vector::new(&[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(x.cross(&y).unwrap().as_slice(), &[0.0, 0.0, 1.0]);
}

#[test]
#[allow(clippy::float_cmp)]
fn identity_determinant_is_one() {
    for n in 1..=6 {
        assert_eq!(Matrix::<f64>::identity(n).unwrap().determinant().unwrap(), 1.0);
    }
}

#[test]
fn identity_has_full_rank() {
    for n in 1..=6 {
        assert_eq!(rank(&Matrix::<f64>::identity(n).unwrap()), n);
    }
}

#[test]
fn determinant_matches_up_to_five_by_five() {
    // 5x5 with a known determinant: det(L) * det(U) for triangular factors.
    let l = Matrix::from_rows(&[
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
        vec![2.0, 1.0, 0.0, 0.0, 0.0],
        vec![-1.0, 3.0, 1.0, 0.0, 0.0],
        vec![0.5, 0.0, 2.0, 1.0, 0.0],
        vec![4.0, -2.0, 1.0, 3.0, 1.0],
    ])
    .unwrap();
    let u = Matrix::from_rows(&[
        vec![2.0, 1.0, 0.0, 3.0, 1.0],
        vec![0.0, -3.0, 1.0, 2.0, 0.0],
        vec![0.0, 0.0, 1.5, 1.0, -1.0],
        vec![0.0, 0.0, 0.0, 4.0, 2.0],
        vec![0.0, 0.0, 0.0, 0.0, -0.5],
    ])
    .unwrap();
    let a = l.multiply(&u).unwrap();
    assert_abs_diff_eq!(a.determinant().unwrap(), 18.0, epsilon = 1e-9);
}
