use approx::assert_relative_eq;
use lumen_linalg::{Error, Matrix, Vector};

const ROUNDS: usize = 200;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_elems(rng: &mut fastrand::Rng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.i64(-1000..=1000)).collect()
}

fn random_vector(rng: &mut fastrand::Rng, len: usize) -> Vector<i64> {
    random_elems(rng, len).into()
}

fn random_vector_f64(rng: &mut fastrand::Rng, len: usize) -> Vector<f64> {
    (0..len).map(|_| rng.f64() * 200.0 - 100.0).collect()
}

fn int_norm(elems: &[i64]) -> i64 {
    (elems.iter().map(|e| e * e).sum::<i64>() as f64).sqrt() as i64
}

fn float_norm(elems: &[f64]) -> f64 {
    elems.iter().fold(0.0, |acc, e| acc + e * e).sqrt()
}

/// Exact integer norm of the given absolute values, clamped to `max`.
fn exact_norm(abs: impl IntoIterator<Item = u128>, max: u128) -> u128 {
    let sum: u128 = abs.into_iter().map(|a| a * a).sum();
    // Binary search for the largest `root` with `root * root <= sum`.
    let (mut lo, mut hi) = (0u128, 1u128 << 64);
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if mid * mid <= sum {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo.min(max)
}

#[test]
fn arithmetic_matches_elements_and_recomputes_magnitude() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x5eed);

    for _ in 0..ROUNDS {
        let len = rng.usize(0..16);
        let a = random_vector(&mut rng, len);
        let b = random_vector(&mut rng, len);

        let sum = a.checked_add(&b)?;
        let diff = a.checked_sub(&b)?;
        let prod = a.checked_mul(&b)?;
        for i in 0..len {
            assert_eq!(sum[i], a[i] + b[i]);
            assert_eq!(diff[i], a[i] - b[i]);
            assert_eq!(prod[i], a[i] * b[i]);
        }
        assert_eq!(sum.magnitude(), int_norm(sum.as_slice()));
        assert_eq!(diff.magnitude(), int_norm(diff.as_slice()));
        assert_eq!(prod.magnitude(), int_norm(prod.as_slice()));

        let factor = rng.i64(-10..=10);
        let scaled = a.scale(factor);
        assert_eq!(scaled.magnitude(), int_norm(scaled.as_slice()));
        assert_eq!(scaled, &a * factor);
    }
    Ok(())
}

#[test]
fn integer_magnitude_is_exact_near_type_limits() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0x1137);

    for _ in 0..ROUNDS {
        let len = rng.usize(0..8);

        // Full-range elements: squares overflow the element type.
        let a: Vector<u8> = (0..len).map(|_| rng.u8(..)).collect();
        let b: Vector<i16> = (0..len).map(|_| rng.i16(..)).collect();
        let c: Vector<i32> = (0..len).map(|_| rng.i32(..)).collect();
        assert_eq!(
            a.magnitude() as u128,
            exact_norm(a.iter().map(|&e| e as u128), u8::MAX as u128)
        );
        assert_eq!(
            b.magnitude() as u128,
            exact_norm(b.iter().map(|e| e.unsigned_abs() as u128), i16::MAX as u128)
        );
        assert_eq!(
            c.magnitude() as u128,
            exact_norm(c.iter().map(|e| e.unsigned_abs() as u128), i32::MAX as u128)
        );

        // Half-range elements: sums fit, their squares don't.
        let x: Vector<u8> = (0..len).map(|_| rng.u8(..128)).collect();
        let y: Vector<u8> = (0..len).map(|_| rng.u8(..128)).collect();
        let sum = x.checked_add(&y)?;
        for i in 0..len {
            assert_eq!(sum[i], x[i] + y[i]);
        }
        assert_eq!(
            sum.magnitude() as u128,
            exact_norm(sum.iter().map(|&e| e as u128), u8::MAX as u128)
        );

        let x: Vector<i32> = (0..len).map(|_| rng.i32(i32::MIN / 2..i32::MAX / 2)).collect();
        let y: Vector<i32> = (0..len).map(|_| rng.i32(i32::MIN / 2..i32::MAX / 2)).collect();
        let diff = x.checked_sub(&y)?;
        for i in 0..len {
            assert_eq!(diff[i], x[i] - y[i]);
        }
        assert_eq!(
            diff.magnitude() as u128,
            exact_norm(diff.iter().map(|e| e.unsigned_abs() as u128), i32::MAX as u128)
        );
    }
    Ok(())
}

#[test]
fn float_arithmetic_recomputes_magnitude() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..ROUNDS {
        let len = rng.usize(1..16);
        let a = random_vector_f64(&mut rng, len);
        let b = random_vector_f64(&mut rng, len);
        assert_eq!(a.magnitude(), float_norm(a.as_slice()));

        let sum = &a + &b;
        assert_eq!(sum.magnitude(), float_norm(sum.as_slice()));

        let scaled = a.scale(-2.5);
        assert_eq!(scaled.magnitude(), float_norm(scaled.as_slice()));

        let unit = a.normalize()?;
        assert_eq!(unit.magnitude(), 1.0);
        assert_relative_eq!(float_norm(unit.as_slice()), 1.0, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn equality_is_elementwise() {
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..ROUNDS {
        // Small element range so that equal vectors come up regularly.
        let a: Vector<i32> = (0..rng.usize(0..4)).map(|_| rng.i32(0..2)).collect();
        let b: Vector<i32> = (0..rng.usize(0..4)).map(|_| rng.i32(0..2)).collect();

        let expected = a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x == y);
        assert_eq!(a == b, expected);
        assert_eq!(a != b, !expected);
    }
}

#[test]
fn binary_ops_reject_size_mismatch() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(99);

    for _ in 0..ROUNDS {
        let left = rng.usize(0..10);
        let right = rng.usize(0..10);
        if left == right {
            continue;
        }
        let a = random_vector(&mut rng, left);
        let b = random_vector(&mut rng, right);
        let err = Error::SizeMismatch { left, right };

        assert_eq!(a.checked_add(&b).unwrap_err(), err);
        assert_eq!(a.checked_sub(&b).unwrap_err(), err);
        assert_eq!(a.checked_mul(&b).unwrap_err(), err);
        assert_eq!(a.dot(&b).unwrap_err(), err);
    }
}

#[test]
fn dot_matches_sum_of_products() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(3);

    for _ in 0..ROUNDS {
        let len = rng.usize(0..16);
        let a = random_vector(&mut rng, len);
        let b = random_vector(&mut rng, len);
        assert_eq!(a.dot(&b)?, a.checked_mul(&b)?.sum());
    }
    Ok(())
}

#[test]
fn matrix_product_matches_nalgebra() -> anyhow::Result<()> {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(0xdead_beef);

    for _ in 0..ROUNDS {
        let n = rng.usize(2..=4);
        let a_elems = random_elems(&mut rng, n * n);
        let b_elems = random_elems(&mut rng, n * n);

        let a = Matrix::from_row_major(a_elems.clone())?;
        let b = Matrix::from_row_major(b_elems.clone())?;
        let c = a.checked_mul(&b)?;

        let na_a = nalgebra::DMatrix::from_row_slice(n, n, &a_elems);
        let na_b = nalgebra::DMatrix::from_row_slice(n, n, &b_elems);
        let na_c = na_a * na_b;

        for row in 0..n {
            for col in 0..n {
                assert_eq!(c[(row, col)], na_c[(row, col)]);
            }
        }
    }
    Ok(())
}

#[test]
fn float_matrix_product_matches_nalgebra() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(1234);

    for _ in 0..ROUNDS {
        let n = rng.usize(2..=4);
        let a_elems: Vec<f64> = (0..n * n).map(|_| rng.f64() * 2.0 - 1.0).collect();
        let b_elems: Vec<f64> = (0..n * n).map(|_| rng.f64() * 2.0 - 1.0).collect();

        let c = Matrix::from_row_major(a_elems.clone())?
            .checked_mul(&Matrix::from_row_major(b_elems.clone())?)?;
        let na_c = nalgebra::DMatrix::from_row_slice(n, n, &a_elems)
            * nalgebra::DMatrix::from_row_slice(n, n, &b_elems);

        for row in 0..n {
            for col in 0..n {
                assert_relative_eq!(c[(row, col)], na_c[(row, col)], epsilon = 1e-12);
            }
        }
    }
    Ok(())
}

#[test]
fn identity_is_neutral() -> anyhow::Result<()> {
    let mut rng = fastrand::Rng::with_seed(11);

    for _ in 0..ROUNDS {
        let n = rng.usize(2..=4);
        let m = Matrix::from_row_major(random_elems(&mut rng, n * n))?;
        let id = Matrix::identity(n)?;
        assert_eq!(m.checked_mul(&id)?, m);
        assert_eq!(id.checked_mul(&m)?, m);

        let zero = Matrix::zeroed(n)?;
        assert_eq!(m.checked_mul(&zero)?, zero);
    }
    Ok(())
}

#[test]
fn matrix_sizes_must_match() {
    init_logger();
    for left in 2..=4 {
        for right in 2..=4 {
            let a = Matrix::<f32>::identity(left).unwrap();
            let b = Matrix::<f32>::identity(right).unwrap();
            let product = a.checked_mul(&b);
            if left == right {
                assert_eq!(product.unwrap(), a);
            } else {
                assert_eq!(product.unwrap_err(), Error::SizeMismatch { left, right });
            }
        }
    }
}
