use std::{fmt, mem, slice};

use crate::{
    error::{Error, Result},
    Number, One, Zero,
};

mod ops;

const SUPPORTED_SIZES: &str = "2, 3 or 4";
const SUPPORTED_LENGTHS: &str = "4, 9 or 16 elements";

/// A square, row-major matrix with 2, 3 or 4 rows and columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::zeroed`] creates a matrix of the given size with every element set to 0.
/// - [`Matrix::identity`] creates a matrix with 1 on its diagonal and 0 everywhere else.
/// - [`Matrix::from_row_major`] takes ownership of a [`Vec`] of 4, 9 or 16 elements and infers
///   the size from its length. The [`TryFrom`] impls do the same for [`Vec`]s and slices.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
///
/// Any other size fails with [`Error::InvalidSize`].
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use lumen_linalg::*;
/// let mut mat = Matrix::from_row_major(vec![
///     0, 1,
///     2, 3,
/// ])?;
/// mat[(1, 0)] = 4;
/// assert_eq!(mat[(1, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// # Ok::<(), Error>(())
/// ```
///
/// Indexing out of bounds will result in a panic. [`Matrix::get`] and [`Matrix::get_mut`] return
/// [`Option`]s instead.
///
/// # Buffer Layout
///
/// Elements are stored contiguously in row-major order without padding: the element at
/// `(row, col)` lives at offset `row * size + col`. [`Matrix::as_slice`], [`Matrix::as_ptr`],
/// [`Matrix::as_bytes`] and [`Matrix::byte_len`] expose that buffer for upload to a graphics API.
/// APIs that expect column-major data can either be told to transpose on upload, or be given
/// the buffer of [`Matrix::transpose`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Hash)]
pub struct Matrix<T> {
    size: usize,
    elements: Vec<T>,
}

fn check_size(size: usize) -> Result<usize> {
    match size {
        2..=4 => Ok(size),
        _ => {
            log::trace!("rejecting matrix size {}", size);
            Err(Error::InvalidSize {
                got: size,
                expected: SUPPORTED_SIZES,
            })
        }
    }
}

fn size_for_len(len: usize) -> Result<usize> {
    match len {
        4 => Ok(2),
        9 => Ok(3),
        16 => Ok(4),
        _ => {
            log::trace!("{} elements do not form a supported square matrix", len);
            Err(Error::InvalidSize {
                got: len,
                expected: SUPPORTED_LENGTHS,
            })
        }
    }
}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from its elements in row-major order.
    ///
    /// The size of the matrix is inferred from the number of elements: 4, 9 and 16 elements
    /// create a 2x2, 3x3 and 4x4 matrix respectively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for any other number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_row_major(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    /// assert_eq!(mat.size(), 3);
    /// assert_eq!(mat[(1, 0)], 4);
    ///
    /// assert!(Matrix::from_row_major(vec![0; 10]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_row_major(elements: Vec<T>) -> Result<Self> {
        let size = size_for_len(elements.len())?;
        Ok(Self { size, elements })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `size` is 2, 3 or 4.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_fn(2, |row, col| row * 10 + col)?;
    /// assert_eq!(mat, Matrix::from_row_major(vec![
    ///      0,  1,
    ///     10, 11,
    /// ])?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_fn<F>(size: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let size = check_size(size)?;
        Ok(Self::from_fn_unchecked(size, cb))
    }

    fn from_fn_unchecked<F>(size: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let elements = (0..size * size)
            .map(|i| cb(i / size, i % size))
            .collect();
        Self { size, elements }
    }

    /// Returns the number of rows (and columns) of this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_row_major(vec![0, 1, 2, 3])?;
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&2));
    /// assert_eq!(mat.get(0, 2), None);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.elements.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.size && col < self.size {
            self.elements.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of this matrix.
    pub fn rows(&self) -> slice::ChunksExact<'_, T> {
        self.elements.chunks_exact(self.size)
    }

    /// Returns the elements as a row-major slice of `size * size` elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a pointer to the first element of the row-major buffer.
    ///
    /// The pointer is only valid while `self` is alive and not mutated, and must not be written
    /// through. Prefer [`Matrix::as_slice`] or [`Matrix::as_bytes`] where a borrow will do.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Returns the size of the element buffer in bytes, `size * size * size_of::<T>()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// assert_eq!(Matrix::<f32>::identity(4)?.byte_len(), 64);
    /// assert_eq!(Matrix::<u8>::zeroed(3)?.byte_len(), 9);
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.elements.len() * mem::size_of::<T>()
    }

    /// Returns the row-major element buffer as raw bytes, in the native representation of `T`.
    ///
    /// This is the format expected for uniform buffer uploads.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::<f32>::identity(2)?;
    /// let bytes = mat.as_bytes();
    /// assert_eq!(bytes.len(), mat.byte_len());
    /// assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.elements)
    }

    /// Consumes the matrix, returning its row-major elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::from_row_major(vec![
    ///     1, 2,
    ///     3, 4,
    /// ])?;
    /// assert_eq!(mat.transpose(), Matrix::from_row_major(vec![
    ///     1, 3,
    ///     2, 4,
    /// ])?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn transpose(&self) -> Self
    where
        T: Copy,
    {
        Self::from_fn_unchecked(self.size, |row, col| self[(col, row)])
    }
}

impl<T: Zero + Copy> Matrix<T> {
    /// Creates a `size`x`size` matrix with every element set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `size` is 2, 3 or 4.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let mat = Matrix::<i32>::zeroed(3)?;
    /// assert_eq!(mat.as_slice(), &[0; 9]);
    ///
    /// assert_eq!(
    ///     Matrix::<i32>::zeroed(5),
    ///     Err(Error::InvalidSize { got: 5, expected: "2, 3 or 4" }),
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn zeroed(size: usize) -> Result<Self> {
        let size = check_size(size)?;
        Ok(Self {
            size,
            elements: vec![T::ZERO; size * size],
        })
    }
}

impl<T: Zero + One> Matrix<T> {
    /// Creates the `size`x`size` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `size` is 2, 3 or 4.
    pub fn identity(size: usize) -> Result<Self> {
        Self::from_fn(size, |row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Number> Matrix<T> {
    /// Computes the matrix product `self * other`.
    ///
    /// Element `(i, j)` of the result is `Σₖ self[(i, k)] * other[(k, j)]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the matrices have different sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumen_linalg::*;
    /// let a = Matrix::from_row_major(vec![
    ///     1, 2,
    ///     3, 4,
    /// ])?;
    /// let b = Matrix::from_row_major(vec![
    ///     5, 6,
    ///     7, 8,
    /// ])?;
    /// assert_eq!(a.checked_mul(&b)?, Matrix::from_row_major(vec![
    ///     19, 22,
    ///     43, 50,
    /// ])?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.size != other.size {
            log::trace!(
                "cannot multiply {0}x{0} matrix with {1}x{1} matrix",
                self.size,
                other.size
            );
            return Err(Error::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }

        let n = self.size;
        Ok(Self::from_fn_unchecked(n, |i, j| {
            (0..n).fold(T::ZERO, |acc, k| acc + self[(i, k)] * other[(k, j)])
        }))
    }
}

impl<T> TryFrom<Vec<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::from_row_major(value)
    }
}

impl<T: Clone> TryFrom<&[T]> for Matrix<T> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self> {
        Self::from_row_major(value.to_vec())
    }
}

impl<T> AsRef<[T]> for Matrix<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each row stays on one line, even with `{:#?}`.
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list().entries(self.rows().map(FormatRow)).finish()
    }
}
