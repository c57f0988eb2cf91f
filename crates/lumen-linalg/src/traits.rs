use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
///
/// [`f32`] and [`f64`] use their inherent `sqrt` methods. Integer types compute the exact
/// integer square root (the root truncated toward zero), so `14.sqrt()` is `3`. Negative signed
/// integers have a root of 0.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that can compute the Euclidean norm `sqrt(Σ eᵢ²)` of a slice of themselves.
///
/// This is what [`Vector`][crate::Vector] uses to maintain its cached magnitude.
///
/// Integer types accumulate the squares in [`u128`], so elements whose squares do not fit in the
/// element type are handled exactly. The result is the truncated root, saturated to `Self::MAX`
/// if it does not fit (e.g. the norm of `[255u8, 255]` is `255`). Only if the sum of squares
/// overflows [`u128`] (possible for 128-bit elements) is it approximated in [`f64`].
pub trait Norm: Sized {
    fn norm(elements: &[Self]) -> Self;
}

/// Exact integer square root.
fn isqrt(n: u128) -> u128 {
    // The `f64` estimate is within a few units of the true root; correct it.
    let mut root = (n as f64).sqrt() as u128;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the element bound of [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix]
/// arithmetic. Unlike a general "number" trait, it does not require negation, so unsigned
/// integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! int_norm {
    ($($types:ty),+ => |$elem:ident| $to_unsigned:expr) => {
        $(
            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    // The root of any non-negative value fits in `Self`.
                    isqrt(Ord::max(self, 0) as u128) as Self
                }
            }

            impl Norm for $types {
                fn norm(elements: &[Self]) -> Self {
                    let sum = elements.iter().try_fold(0u128, |acc, &$elem| {
                        let abs = $to_unsigned as u128;
                        abs.checked_mul(abs).and_then(|sq| acc.checked_add(sq))
                    });
                    match sum {
                        Some(sum) => Self::try_from(isqrt(sum)).unwrap_or(Self::MAX),
                        None => {
                            let sum = elements
                                .iter()
                                .fold(0.0f64, |acc, &e| acc + (e as f64) * (e as f64));
                            // Saturating cast.
                            sum.sqrt() as Self
                        }
                    }
                }
            }
        )+
    };
}
int_norm!(u8, u16, u32, u64, u128, usize => |elem| elem);
int_norm!(i8, i16, i32, i64, i128, isize => |elem| elem.unsigned_abs());

impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl Zero for f64 {
    const ZERO: Self = 0.0;
}

impl One for f32 {
    const ONE: Self = 1.0;
}
impl One for f64 {
    const ONE: Self = 1.0;
}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Norm for f32 {
    fn norm(elements: &[Self]) -> Self {
        elements.iter().fold(0.0, |acc, &elem| acc + elem * elem).sqrt()
    }
}
impl Norm for f64 {
    fn norm(elements: &[Self]) -> Self {
        elements.iter().fold(0.0, |acc, &elem| acc + elem * elem).sqrt()
    }
}
