//! Resolved (data type, format) pair.

use core::fmt;

use crate::data_type::DataType;
use crate::error::SizeError;
use crate::format::{FormatSpec, PixelFormat};
use crate::limits::SizeLimits;

/// A data type and format that have both been recognized.
///
/// Resolve the raw enums once with [`from_raw`](Self::from_raw), then size
/// and validate any number of buffers against it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct DataDescriptor {
    /// Storage type of each component.
    pub data_type: DataType,
    /// Component layout.
    pub format: FormatSpec,
}

impl DataDescriptor {
    /// Create a descriptor from already-typed parts.
    pub const fn new(data_type: DataType, format: FormatSpec) -> Self {
        Self { data_type, format }
    }

    /// Create a descriptor for a named format.
    pub const fn named(data_type: DataType, format: PixelFormat) -> Self {
        Self::new(data_type, FormatSpec::Named(format))
    }

    /// Resolve raw `GLenum` values.
    ///
    /// The format is resolved first, so when both values are bad the error
    /// is [`SizeError::UnknownFormat`].
    pub fn from_raw(data_type: u32, format: u32) -> Result<Self, SizeError> {
        let format = FormatSpec::from_raw(format)?;
        let data_type = DataType::try_from_raw(data_type)?;
        Ok(Self { data_type, format })
    }

    /// Number of components per element.
    #[inline]
    pub const fn components(&self) -> u32 {
        self.format.components()
    }

    /// Bytes in one element (pixel or vertex).
    #[inline]
    pub const fn unit_size(&self) -> usize {
        self.data_type.storage().unit_bytes(self.components())
    }

    /// Bytes needed for `count` elements.
    ///
    /// Bitmap data packs eight elements per byte and the count is divided
    /// down with truncation, so a trailing partial byte is not counted and
    /// row alignment padding is ignored.
    pub fn total_size(&self, count: usize) -> Result<usize, SizeError> {
        let unit = self.unit_size();
        let units = if self.data_type.is_bitmap() {
            count / 8
        } else {
            count
        };
        let total = unit.checked_mul(units).ok_or(SizeError::Overflow)?;
        log::trace!("{self}: {count} elements need {total} bytes");
        Ok(total)
    }

    /// [`total_size`](Self::total_size), with `count` and the result checked
    /// against `limits`.
    pub fn total_size_with_limits(
        &self,
        count: usize,
        limits: &SizeLimits,
    ) -> Result<usize, SizeError> {
        limits.check_elements(count)?;
        let total = self.total_size(count)?;
        limits.check_bytes(total)?;
        Ok(total)
    }

    /// Check that `data` holds at least `count` elements.
    ///
    /// Longer buffers are accepted.
    ///
    /// # Errors
    ///
    /// [`SizeError::BufferTooSmall`] with the computed and actual lengths.
    pub fn validate(&self, count: usize, data: &[u8]) -> Result<(), SizeError> {
        let expected = self.total_size(count)?;
        if data.len() < expected {
            log::debug!(
                "{self}: buffer of {} bytes is short of {expected} for {count} elements",
                data.len()
            );
            return Err(SizeError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DataDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.data_type, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LegacyCount;
    use crate::gl;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn from_raw_resolves_both() {
        let desc = DataDescriptor::from_raw(gl::UNSIGNED_BYTE, gl::RGBA).unwrap();
        assert_eq!(desc.data_type, DataType::UnsignedByte);
        assert_eq!(desc.format, FormatSpec::Named(PixelFormat::Rgba));
        assert_eq!(desc.components(), 4);
    }

    #[test]
    fn from_raw_reports_format_first() {
        assert_eq!(
            DataDescriptor::from_raw(12345, 999_999),
            Err(SizeError::UnknownFormat(999_999))
        );
        assert_eq!(
            DataDescriptor::from_raw(12345, gl::RGBA),
            Err(SizeError::UnknownType(12345))
        );
    }

    #[test]
    fn scalar_unit_sizes() {
        let d = DataDescriptor::named(DataType::UnsignedByte, PixelFormat::Rgba);
        assert_eq!(d.unit_size(), 4);
        let d = DataDescriptor::named(DataType::Short, PixelFormat::Rgb);
        assert_eq!(d.unit_size(), 6);
        let d = DataDescriptor::named(DataType::Float, PixelFormat::Luminance);
        assert_eq!(d.unit_size(), 4);
        let d = DataDescriptor::named(DataType::UnsignedInt, PixelFormat::Cmyka);
        assert_eq!(d.unit_size(), 20);
    }

    #[test]
    fn packed_unit_sizes_ignore_components() {
        let d = DataDescriptor::named(DataType::UnsignedShort565, PixelFormat::Rgb);
        assert_eq!(d.unit_size(), 2);
        let d = DataDescriptor::named(DataType::UnsignedInt8888, PixelFormat::Rgba);
        assert_eq!(d.unit_size(), 4);
        let d = DataDescriptor::named(DataType::UnsignedByte332, PixelFormat::Rgb);
        assert_eq!(d.unit_size(), 1);
    }

    #[test]
    fn legacy_format_unit_size() {
        let d = DataDescriptor::new(DataType::UnsignedShort, FormatSpec::from_raw(3).unwrap());
        assert_eq!(d.unit_size(), 6);
    }

    #[test]
    fn total_size_scales_by_count() {
        let d = DataDescriptor::named(DataType::UnsignedByte, PixelFormat::Rgba);
        assert_eq!(d.total_size(10), Ok(40));
        assert_eq!(d.total_size(0), Ok(0));
    }

    #[test]
    fn bitmap_truncates_partial_byte() {
        let d = DataDescriptor::named(DataType::Bitmap, PixelFormat::Luminance);
        assert_eq!(d.total_size(16), Ok(2));
        assert_eq!(d.total_size(17), Ok(2));
        assert_eq!(d.total_size(7), Ok(0));
    }

    #[test]
    fn total_size_overflow() {
        let d = DataDescriptor::named(DataType::Float, PixelFormat::Rgba);
        assert_eq!(d.total_size(usize::MAX), Err(SizeError::Overflow));
    }

    #[test]
    fn total_size_with_limits() {
        let d = DataDescriptor::named(DataType::UnsignedByte, PixelFormat::Rgba);
        let limits = SizeLimits::none()
            .with_max_elements(1000)
            .with_max_bytes(100);
        assert_eq!(d.total_size_with_limits(25, &limits), Ok(100));
        assert!(matches!(
            d.total_size_with_limits(26, &limits),
            Err(SizeError::Limit(crate::LimitExceeded::Bytes { actual: 104, max: 100 }))
        ));
        assert!(matches!(
            d.total_size_with_limits(1001, &limits),
            Err(SizeError::Limit(crate::LimitExceeded::Elements { .. }))
        ));
    }

    #[test]
    fn validate_accepts_exact_and_longer() {
        let d = DataDescriptor::named(DataType::UnsignedByte, PixelFormat::Rgba);
        assert!(d.validate(4, &[0u8; 16]).is_ok());
        assert!(d.validate(4, &vec![0u8; 1000]).is_ok());
    }

    #[test]
    fn validate_rejects_short_buffer() {
        let d = DataDescriptor::named(DataType::UnsignedByte, PixelFormat::Rgba);
        assert_eq!(
            d.validate(4, &[0u8; 15]),
            Err(SizeError::BufferTooSmall {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn validate_empty_for_zero_count() {
        let d = DataDescriptor::named(DataType::Float, PixelFormat::Rgb);
        assert!(d.validate(0, &[]).is_ok());
    }

    #[test]
    fn display_joins_type_and_format() {
        let d = DataDescriptor::named(DataType::Float, PixelFormat::Rgb);
        assert_eq!(format!("{d}"), "GL_FLOAT/GL_RGB");
    }

    #[test]
    fn every_constructible_descriptor_has_positive_unit() {
        let legacy = (1..=4u8).filter_map(LegacyCount::new).map(FormatSpec::from);
        let named = PixelFormat::ALL.into_iter().map(FormatSpec::from);
        for format in legacy.chain(named) {
            for data_type in DataType::ALL {
                let d = DataDescriptor::new(data_type, format);
                assert!(d.unit_size() > 0, "{d}");
                if !data_type.is_bitmap() {
                    assert_eq!(
                        d.validate(1000, &[]),
                        Err(SizeError::BufferTooSmall {
                            expected: d.unit_size() * 1000,
                            actual: 0
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn packed_unit_size_is_independent_of_format() {
        for data_type in DataType::ALL.into_iter().filter(|t| t.is_packed()) {
            let expected = DataDescriptor::named(data_type, PixelFormat::Luminance).unit_size();
            for format in PixelFormat::ALL {
                let d = DataDescriptor::named(data_type, format);
                assert_eq!(d.unit_size(), expected, "{d}");
            }
        }
    }
}
