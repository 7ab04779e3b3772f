//! Small, immutable vectors with GLSL-style swizzling.
//!
//! This crate provides [`Vector<T, N>`], a fixed-size vector of 2, 3 or 4 floating-point
//! components, along with the element-wise and scalar arithmetic, magnitude, dot product and
//! normalization operations typically needed when preparing data for a GPU.
//!
//! # Swizzling
//!
//! Components can be read through any of the built-in alias tables (see [`alias`]), and any
//! ordered selection of them can be read at once:
//!
//! ```
//! # use vecn_linalg::*;
//! let v = vec4(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.x(), 1.0);
//! assert_eq!(v.zyx(), vec3(3.0, 2.0, 1.0));
//! assert_eq!(v.bgra(), v.zyxw());
//! assert_eq!(v.swizzle("30").unwrap(), Value::from(vec2(4.0, 1.0)));
//! ```
//!
//! See the [`swizzle`] module for details.
//!
//! # Goals & Non-Goals
//!
//! - Vectors are values. There is no way to modify a vector in place; every operation returns a
//!   new one.
//! - Dimensions are const generics wherever they are known at compile time. [`AnyVector`] and
//!   [`VectorType`] cover dimensions that are only known at run time, and report mismatches as
//!   [`Error`]s instead.
//! - Support only a single, unpadded data layout, so that slices of vectors can be uploaded as
//!   they are (see [`bytemuck`]).
//! - No matrices, quaternions or other linear algebra beyond single-vector operations.

pub mod alias;
mod any;
mod convenience;
mod dim;
mod error;
pub mod swizzle;
mod traits;
mod vector;

pub use any::*;
pub use convenience::*;
pub use dim::*;
pub use error::*;
pub use traits::*;
pub use vector::*;

/// The smallest supported vector dimension.
pub const MIN_DIM: usize = 2;

/// The largest supported vector dimension.
///
/// This is the number of component names in the primary alias table (`xyzw`).
pub const MAX_DIM: usize = 4;
