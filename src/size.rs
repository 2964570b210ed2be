//! Size resolution on raw `GLenum` arguments.
//!
//! These are the entry points a binding layer calls with the integers it
//! receives from script code. Each one resolves the enums and defers to
//! [`DataDescriptor`].

use crate::descriptor::DataDescriptor;
use crate::error::SizeError;
use crate::format::FormatSpec;

/// Number of components for a format enum, or a legacy 1–4 count.
///
/// # Errors
///
/// [`SizeError::UnknownFormat`] for anything else.
pub fn component_count(format: u32) -> Result<u32, SizeError> {
    Ok(FormatSpec::from_raw(format)?.components())
}

/// Bytes in one pixel (or vertex) of `format` stored as `data_type`.
///
/// The format is checked before the type.
pub fn unit_size(data_type: u32, format: u32) -> Result<usize, SizeError> {
    Ok(DataDescriptor::from_raw(data_type, format)?.unit_size())
}

/// Bytes needed for `count` elements. See [`DataDescriptor::total_size`].
pub fn total_size(data_type: u32, format: u32, count: usize) -> Result<usize, SizeError> {
    DataDescriptor::from_raw(data_type, format)?.total_size(count)
}

/// Check that `data` is long enough for `count` elements.
///
/// # Errors
///
/// [`SizeError::BufferTooSmall`] when `data` is short, or any error from
/// resolving the enums.
pub fn validate_buffer_size(
    data_type: u32,
    format: u32,
    count: usize,
    data: &[u8],
) -> Result<(), SizeError> {
    DataDescriptor::from_raw(data_type, format)?.validate(count, data)
}
