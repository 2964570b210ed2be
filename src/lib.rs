//! Byte-size resolution and buffer validation for GL pixel and vertex data.
//!
//! GL pixel calls describe their data with a format enum (how many
//! components, e.g. `GL_RGBA`) and a type enum (how each component is
//! stored, e.g. `GL_UNSIGNED_BYTE`). This crate turns those two raw
//! values into byte counts so a binding layer can check caller buffers
//! before handing them to native code:
//!
//! - [`component_count`] / [`unit_size`] / [`total_size`] — sizing on raw enums
//! - [`validate_buffer_size`] — reject buffers too short for a request
//! - [`allocate_buffer`] — fallible allocation of read-back buffers
//! - [`PixelFormat`] / [`DataType`] / [`DataDescriptor`] — the typed tables
//! - [`SizeLimits`] — optional caps on element counts and byte sizes
//!
//! ```
//! use gldatasize::{gl, total_size, validate_buffer_size, SizeError};
//!
//! assert_eq!(total_size(gl::UNSIGNED_BYTE, gl::RGBA, 10), Ok(40));
//!
//! let pixels = [0u8; 15];
//! assert_eq!(
//!     validate_buffer_size(gl::UNSIGNED_BYTE, gl::RGBA, 4, &pixels),
//!     Err(SizeError::BufferTooSmall { expected: 16, actual: 15 }),
//! );
//! ```
//!
//! Every function is a pure lookup over `const` tables and is safe to call
//! from any thread.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod gl;

mod buffer;
mod data_type;
mod descriptor;
mod error;
mod format;
mod limits;
mod size;

pub use buffer::{DataBuffer, allocate_buffer, allocate_buffer_with_limits};
pub use data_type::{DataType, Storage};
pub use descriptor::DataDescriptor;
pub use error::SizeError;
pub use format::{FormatSpec, LegacyCount, PixelFormat};
pub use limits::{LimitExceeded, SizeLimits};
pub use size::{component_count, total_size, unit_size, validate_buffer_size};
