use std::ops::{Index, IndexMut, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Matrix};

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let size = self.size;
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!("index ({row}, {col}) out of bounds for {size}x{size} matrix"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let size = self.size;
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => panic!("index ({row}, {col}) out of bounds for {size}x{size} matrix"),
        }
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.elements == other.elements
    }
}

impl<T> Eq for Matrix<T> where T: Eq {}

impl<T> AbsDiffEq for Matrix<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.size == other.size
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.size == other.size
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for Matrix<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.size == other.size
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Matrix * Matrix.
///
/// # Panics
///
/// Panics if the matrices have different sizes. Use [`Matrix::checked_mul`] to handle that case.
impl<T> Mul<&Matrix<T>> for &Matrix<T>
where
    T: Number,
{
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Matrix * Matrix.
impl<T> Mul<Matrix<T>> for Matrix<T>
where
    T: Number,
{
    type Output = Matrix<T>;

    #[track_caller]
    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        &self * &rhs
    }
}

/// Matrix * Matrix, storing the product in the left operand.
impl<T> MulAssign<&Matrix<T>> for Matrix<T>
where
    T: Number,
{
    #[track_caller]
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}
