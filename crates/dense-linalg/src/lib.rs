//! dense-linalg: a small row-major dense matrix library.
//!
//! This crate provides a validated [`Matrix`] value type, pure arithmetic over
//! it (elementwise ops, scaling, matrix products, transpose, map), sub-matrix
//! extraction and a fixed little-endian binary codec. Random matrices draw
//! from an injected [`UniformSource`] so callers control seeding.
//!
//! Fallible operations return [`MatrixError`]; file and stream helpers in
//! [`codec`] return `anyhow::Result` with path context.
pub mod codec;
pub mod config;
pub mod error;
pub mod interop;
pub mod matrix;
pub mod ops;
pub mod random;

pub use codec::{decode, encode};
pub use config::{Init, MatrixConfig};
pub use error::{DimensionError, MatrixError, Result};
pub use matrix::Matrix;
pub use ops::{add, div_elem, map, matmul, matmul_par, mul_elem, scale, sub, transpose, try_map};
pub use random::UniformSource;
