use std::{fmt, slice};

use crate::{
    error::{Error, Result},
    traits::{Norm, Number},
    One, Zero,
};

mod ops;

/// A runtime-sized vector storing elements of type `T` and caching its Euclidean length.
///
/// The size of a [`Vector`] is fixed when it is created. Binary operations between vectors of
/// different sizes fail with [`Error::SizeMismatch`].
///
/// # Construction
///
/// - [`Vector::zeroed`] creates a vector of a given size with every element set to 0.
/// - [`Vector::from_slice`] copies elements from a slice.
/// - Vectors can also be created from arrays, [`Vec`]s and iterators using their [`From`] and
///   [`FromIterator`] implementations.
///
/// # Magnitude
///
/// Every vector caches its *magnitude*, `sqrt(Σ eᵢ²)`, which [`Vector::magnitude`] returns
/// without recomputing it. Constructors and arithmetic operations keep the cached value
/// consistent with the elements. The only exception is [`Vector::normalize`], whose result
/// reports a magnitude of exactly 1.
///
/// For integer element types the magnitude is computed without overflow and truncated toward
/// zero. If it does not fit in the element type it saturates at the type's maximum, so the
/// magnitude of `[255u8, 255]` is `255`.
///
/// # Element Access
///
/// [`Vector::get`] performs checked access and returns [`Error::IndexOutOfRange`] past the end.
/// The [`Index`] impl panics instead, just like it does for slices. There is intentionally no
/// mutable element access, since it would invalidate the cached magnitude.
///
/// [`Index`]: std::ops::Index
#[derive(Clone)]
pub struct Vector<T> {
    elements: Vec<T>,
    magnitude: T,
}

impl<T> Vector<T> {
    /// Returns the number of elements in this [`Vector`].
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if this [`Vector`] has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(Vector::from([1, 2, 3]).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Converts this [`Vector`] into a [`Vec`] of its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than [`Vector::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::from([7, 8, 9]);
    /// assert_eq!(v.get(2), Ok(&9));
    /// assert_eq!(v.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns the cached magnitude (Euclidean length) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(Vector::from([3.0, 4.0]).magnitude(), 5.0);
    /// assert_eq!(Vector::<f32>::zeroed(4).magnitude(), 0.0);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> T
    where
        T: Copy,
    {
        self.magnitude
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            log::trace!("vector size mismatch: {} vs {}", self.len(), other.len());
            return Err(Error::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl<T: Zero + Copy> Vector<T> {
    /// Creates a vector with `size` elements, each initialized to 0.
    ///
    /// A size of 0 is allowed and yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::<i32>::zeroed(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.magnitude(), 0);
    /// ```
    pub fn zeroed(size: usize) -> Self {
        Self {
            elements: vec![T::ZERO; size],
            magnitude: T::ZERO,
        }
    }
}

impl<T: Number> Vector<T> {
    /// Returns the sum of all elements, or 0 for an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(Vector::from([1, 2, 3]).sum(), 6);
    /// assert_eq!(Vector::<f32>::zeroed(0).sum(), 0.0);
    /// ```
    pub fn sum(&self) -> T {
        self.elements.iter().fold(T::ZERO, |acc, &elem| acc + elem)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the vectors have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = Vector::from([3, 1, 2]);
    /// let b = Vector::from([1, 2, 3]);
    /// assert_eq!(a.dot(&b), Ok(11));
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_size(other)?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b))
    }
}

impl<T: Number + Norm> Vector<T> {
    /// Creates a vector holding a copy of `values`, and computes its magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::from_slice(&[0.0, 3.0, 4.0]);
    /// assert_eq!(v.len(), 3);
    /// assert_eq!(v.magnitude(), 5.0);
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    fn from_vec(elements: Vec<T>) -> Self {
        let magnitude = T::norm(&elements);
        Self {
            elements,
            magnitude,
        }
    }

    fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        self.check_size(other)?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Element-wise addition.
    ///
    /// The magnitude of the result is computed from its elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the vectors have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = Vector::from([3, 1, 2]);
    /// let b = Vector::from([1, 2, -3]);
    /// assert_eq!(a.checked_add(&b), Ok(Vector::from([4, 3, -1])));
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the vectors have different lengths.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise multiplication ("scaling by a vector").
    ///
    /// Also see [`Vector::scale`] for multiplying every element by the same factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the vectors have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = Vector::from([1, 2, 3]);
    /// let b = Vector::from([5, 5, -1]);
    /// assert_eq!(a.checked_mul(&b), Ok(Vector::from([5, 10, -3])));
    /// ```
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Multiplies every element by `factor`, returning a new vector.
    ///
    /// The magnitude of the result is recomputed from the scaled elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let v = Vector::from([1, 2, 3, 4, -3, -2, -1]).scale(5);
    /// assert_eq!(v, [5, 10, 15, 20, -15, -10, -5]);
    /// ```
    pub fn scale(&self, factor: T) -> Self {
        self.elements.iter().map(|&elem| elem * factor).collect()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// The result reports a magnitude of exactly 1, rather than a recomputed value that may be
    /// off by rounding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if the magnitude of `self` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let z = Vector::from([0.0, 0.0, 4.0]).normalize()?;
    /// assert_eq!(z, [0.0, 0.0, 1.0]);
    /// assert_eq!(z.magnitude(), 1.0);
    ///
    /// assert_eq!(Vector::<f32>::zeroed(2).normalize(), Err(Error::DegenerateVector));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        if self.magnitude == T::ZERO {
            log::trace!("refusing to normalize zero-magnitude vector of length {}", self.len());
            return Err(Error::DegenerateVector);
        }

        let elements = self
            .elements
            .iter()
            .map(|&elem| elem / self.magnitude)
            .collect();
        Ok(Self {
            elements,
            magnitude: T::ONE,
        })
    }
}

impl<T: Number + Norm> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T: Number + Norm, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_vec(value.into())
    }
}

impl<T: Number + Norm> From<&[T]> for Vector<T> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self::from_slice(value)
    }
}

impl<T: Number + Norm> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.elements
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

fn fmt_elements<T>(
    elements: &[T],
    f: &mut fmt::Formatter<'_>,
    mut fmt_elem: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, elem) in elements.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        fmt_elem(elem, f)?;
    }
    f.write_str(")")
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(&self.elements, f, fmt::Debug::fmt)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(&self.elements, f, fmt::Display::fmt)
    }
}
