//! Small, immutable vectors with GLSL-style swizzling.
//!
//! This crate re-exports everything from `vecn-linalg` and adds the glue an application needs:
//! the [`init_logger!`] macro and the [`#[vecn::main]`][main] attribute.
//!
//! ```
//! use vecn::*;
//!
//! let tint = vec3(0.25, 0.5, 1.0);
//! let rgba = vector![4; tint.bgr(), 1.0].unwrap();
//! assert_eq!(rgba.to_array(), [1.0, 0.5, 0.25, 1.0]);
//! ```
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filter set up by [`init_logger!`], using the [`env_logger`]
//!   syntax.
//!
//! [`env_logger`]: https://docs.rs/env_logger

use log::LevelFilter;

pub use vecn_linalg::*;
pub use vecn_macros::main;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .filter(Some("vecn_linalg"), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `vecn` will log at *trace* level.
/// Otherwise, they will log at *debug* level.
///
/// `vecn-linalg` logs at *debug* level, so that swizzle table generation is reported once per
/// dimension without listing every skipped name.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
