//! Implementations of `std::ops` and comparison traits.

use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::{Norm, Number};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

// Only the elements are compared. The cached magnitude is derived from them.
impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.elements == other.elements
    }
}

impl<T> Eq for Vector<T> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.elements == *other
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.elements == other
    }
}

impl<T> AbsDiffEq for Vector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Vector<T>
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
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> UlpsEq for Vector<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// The operator impls panic on size mismatch; the `checked_*` methods are the fallible versions.
macro_rules! elementwise_op {
    ($doc:literal, $op:ident::$method:ident, $assign:ident::$assign_method:ident, $checked:ident) => {
        #[doc = $doc]
        ///
        /// # Panics
        ///
        /// Panics if the operands have different lengths.
        impl<T> $op<&Vector<T>> for &Vector<T>
        where
            T: Number + Norm,
        {
            type Output = Vector<T>;

            #[track_caller]
            fn $method(self, rhs: &Vector<T>) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(out) => out,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        #[doc = $doc]
        impl<T> $op<Vector<T>> for Vector<T>
        where
            T: Number + Norm,
        {
            type Output = Vector<T>;

            #[track_caller]
            fn $method(self, rhs: Vector<T>) -> Self::Output {
                $op::$method(&self, &rhs)
            }
        }

        #[doc = $doc]
        impl<T> $assign<&Vector<T>> for Vector<T>
        where
            T: Number + Norm,
        {
            #[track_caller]
            fn $assign_method(&mut self, rhs: &Vector<T>) {
                *self = $op::$method(&*self, rhs);
            }
        }

        #[doc = $doc]
        impl<T> $assign<Vector<T>> for Vector<T>
        where
            T: Number + Norm,
        {
            #[track_caller]
            fn $assign_method(&mut self, rhs: Vector<T>) {
                *self = $op::$method(&*self, &rhs);
            }
        }
    };
}

elementwise_op!("Element-wise addition.", Add::add, AddAssign::add_assign, checked_add);
elementwise_op!("Element-wise subtraction.", Sub::sub, SubAssign::sub_assign, checked_sub);
elementwise_op!("Element-wise multiplication.", Mul::mul, MulAssign::mul_assign, checked_mul);

// NB: as with element-wise multiplication above, vector-scalar multiplication uses `Mul`, so a
// more generic `Mul<U> for Vector<T> where T: Mul<U>` is not possible.

/// Vector-Scalar multiplication (scaling).
impl<T> Mul<T> for &Vector<T>
where
    T: Number + Norm,
{
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T> Mul<T> for Vector<T>
where
    T: Number + Norm,
{
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T> MulAssign<T> for Vector<T>
where
    T: Number + Norm,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = self.scale(rhs);
    }
}
