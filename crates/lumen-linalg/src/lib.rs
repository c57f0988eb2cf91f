//! A small linear algebra library for feeding matrices to a renderer.
//!
//! # Overview
//!
//! The crate provides two independent value types:
//!
//! - [`Vector`], a runtime-sized vector that caches its Euclidean length ("magnitude").
//! - [`Matrix`], a square 2x2, 3x3 or 4x4 matrix stored in row-major order, whose buffer can be
//!   handed to a graphics API without copying (see [`Matrix::as_bytes`]).
//!
//! # Goals & Non-Goals
//!
//! - Sizes are checked at runtime. Operations on operands of different sizes return
//!   [`Error::SizeMismatch`] instead of silently truncating. Operator impls (`+`, `*`, ...) panic
//!   in that case, like slice indexing does.
//! - Equality is exact. Use the [`approx`] traits for tolerance-based comparison of floats.
//! - Support only a single, row-major, unpadded data layout for matrices.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - No decompositions, inversion, non-square matrices or SIMD.
//! - The public API exposes two pre-1.0 crates: [`Vector`] and [`Matrix`] implement the
//!   [`approx`] comparison traits, and [`Matrix::as_bytes`] requires [`bytemuck::Pod`] elements.
//!   A semver-breaking release of either crate is a breaking change for this crate too.

mod error;
mod matrix;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
