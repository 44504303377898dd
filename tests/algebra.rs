//! Cross-cutting algebraic laws, checked over randomized inputs.

use linmat::*;

fn random_i64() -> i64 {
    fastrand::i64(-9..=9)
}

fn random_f64() -> f64 {
    fastrand::f64() * 2.0 - 1.0
}

fn random_unit_quat() -> Quat<f64> {
    Quat::from_rotation_xyz(
        random_f64() * 3.0,
        random_f64() * 3.0,
        random_f64() * 3.0,
    )
}

#[test]
fn concrete_scenarios() {
    assert_eq!(vec2(1, 2) + vec2(3, 4), vec2(4, 6));

    let double = Matrix::from_diagonal([2, 2]);
    assert_eq!(Mat2::IDENTITY * double, double);

    assert_eq!(
        vec3(1.0f32, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)),
        vec3(0.0, 0.0, 1.0)
    );

    assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).determinant(), -2);

    let (a, b) = vec3(1, 2, 3).compare(vec3(1, 2, 4));
    assert!(a < b);
    assert!(vec3(1, 2, 3) < vec3(1, 2, 4));

    assert_eq!(
        Mat3f::IDENTITY,
        Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    );
}

#[test]
fn apply_preserves_shape_and_components() {
    for _ in 0..100 {
        let a: Vec4<i64> = Vector::from_fn(|_| random_i64());
        let b: Vec4<i64> = Vector::from_fn(|_| random_i64());
        let out = zip(a, b, |a, b| a * b - 1);
        for i in 0..4 {
            assert_eq!(out[i], a[i] * b[i] - 1);
        }

        let m: Mat3<i64> = Matrix::from_fn(|_, _| random_i64());
        let n: Mat3<i64> = Matrix::from_fn(|_, _| random_i64());
        let out = zip(m, n, |a, b| a + 2 * b);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(out[(row, col)], m[(row, col)] + 2 * n[(row, col)]);
            }
        }

        let s = random_i64();
        let out = zip(m, s, |a, b| a - b);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(out[(row, col)], m[(row, col)] - s);
            }
        }
    }
}

#[test]
fn assign_operators_match_binary_operators() {
    for _ in 0..100 {
        let a: Vec3<i64> = Vector::from_fn(|_| random_i64());
        let b: Vec3<i64> = Vector::from_fn(|_| fastrand::i64(1..=9));
        let shift = fastrand::u32(0..8);

        macro_rules! check {
            ($($op:tt $assign:tt $rhs:expr;)+) => {
                $(
                    {
                        let mut lhs = a;
                        lhs $assign $rhs;
                        assert_eq!(lhs, a $op $rhs);
                    }
                )+
            };
        }

        check! {
            + += b;
            - -= b;
            * *= b;
            / /= b;
            % %= b;
            & &= b;
            | |= b;
            ^ ^= b;
            << <<= shift as i64;
            >> >>= shift as i64;
        }
    }
}

#[test]
fn ordering_is_total_and_lexicographic() {
    let mut vectors = Vec::new();
    let mut tuples = Vec::new();
    for _ in 0..200 {
        let v: Vec3<i64> = Vector::from_fn(|_| fastrand::i64(-2..=2));
        vectors.push(v);
        tuples.push((v.x, v.y, v.z));
    }

    for &a in &vectors {
        for &b in &vectors {
            let relations = [a < b, a == b, a > b];
            assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        }
    }

    vectors.sort();
    tuples.sort();
    let sorted_as_tuples: Vec<_> = vectors.iter().map(|v| (v.x, v.y, v.z)).collect();
    assert_eq!(sorted_as_tuples, tuples);
}

#[test]
fn adjugate_identity_laws() {
    for _ in 0..50 {
        let m: Mat2<i64> = Matrix::from_fn(|_, _| random_i64());
        let id = Mat2::IDENTITY * m.determinant();
        assert_eq!(m * m.adjugate(), id);
        assert_eq!(m.adjugate() * m, id);

        let m: Mat3<i64> = Matrix::from_fn(|_, _| random_i64());
        let id = Mat3::IDENTITY * m.determinant();
        assert_eq!(m * m.adjugate(), id);
        assert_eq!(m.adjugate() * m, id);

        let m: Mat4<i64> = Matrix::from_fn(|_, _| random_i64());
        let id = Mat4::IDENTITY * m.determinant();
        assert_eq!(m * m.adjugate(), id);
        assert_eq!(m.adjugate() * m, id);
    }
}

#[test]
fn inverse_round_trip() {
    for _ in 0..50 {
        // Strict diagonal dominance keeps the matrices comfortably non-singular.
        let m = Mat4::from_fn(|_, _| random_f64()) + Mat4::from_diagonal([5.0; 4]);
        assert_approx_eq!(m * m.invert(), Mat4::<f64>::IDENTITY, epsilon = 1e-9);
        assert_approx_eq!(m.invert() * m, Mat4::<f64>::IDENTITY, epsilon = 1e-9);

        let m = Mat3::from_fn(|_, _| random_f64()) + Mat3::from_diagonal([4.0; 3]);
        assert_approx_eq!(m * m.invert(), Mat3::<f64>::IDENTITY, epsilon = 1e-9);

        let m = Mat2::from_fn(|_, _| random_f64()) + Mat2::from_diagonal([3.0; 2]);
        assert_approx_eq!(m * m.invert(), Mat2::<f64>::IDENTITY, epsilon = 1e-9);
    }
}

#[test]
fn quat_rotation_matches_sandwich_product() {
    for _ in 0..100 {
        let q = random_unit_quat();
        let v = vec3(random_f64(), random_f64(), random_f64()) * 5.0;

        let sandwich = q * Quat::from_parts(v, 0.0) * q.conjugate();
        assert_approx_eq!(q.rotate(v), sandwich.xyz(), epsilon = 1e-9);

        // Also holds for non-unit quaternions (both sides scale by the squared length).
        let q = q * 1.7;
        let sandwich = q * Quat::from_parts(v, 0.0) * q.conjugate();
        assert_approx_eq!(q.rotate(v), sandwich.xyz(), epsilon = 1e-7);
    }
}

#[test]
fn rotation_preserves_length_and_composes() {
    for _ in 0..50 {
        let a = random_unit_quat();
        let b = random_unit_quat();
        let v = vec3(random_f64(), random_f64(), random_f64());

        assert_approx_eq!(a.rotate(v).length(), v.length(), epsilon = 1e-9);
        assert_approx_eq!((a * b).rotate(v), a.rotate(b.rotate(v)), epsilon = 1e-9);
        assert_approx_eq!(
            (a.rotation_matrix() * b.rotation_matrix()) * v,
            (a * b).rotate(v),
            epsilon = 1e-9
        );
    }
}
