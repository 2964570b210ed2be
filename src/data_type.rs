//! Data type enumerants and their storage widths.

use core::fmt;

use crate::error::SizeError;
use crate::gl;

/// How a data type stores the components of one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Each component occupies its own scalar of `bytes` width.
    Scalar {
        /// Width of one component in bytes (1, 2, or 4).
        bytes: u8,
    },
    /// All components share a single word of `bytes` width.
    Packed {
        /// Width of the packed word in bytes (1, 2, or 4).
        bytes: u8,
    },
}

impl Storage {
    /// Bytes for one pixel with `components` components.
    ///
    /// Packed words already hold every component, so `components` only
    /// scales scalar storage.
    #[inline]
    pub const fn unit_bytes(self, components: u32) -> usize {
        match self {
            Self::Scalar { bytes } => bytes as usize * components as usize,
            Self::Packed { bytes } => bytes as usize,
        }
    }
}

/// Scalar storage type of pixel components, identified by its `GLenum` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u32)]
pub enum DataType {
    /// 8-bit signed integer (1 byte per component).
    Byte = gl::BYTE,
    /// 8-bit unsigned integer (1 byte per component).
    UnsignedByte = gl::UNSIGNED_BYTE,
    /// 16-bit signed integer (2 bytes per component).
    Short = gl::SHORT,
    /// 16-bit unsigned integer (2 bytes per component).
    UnsignedShort = gl::UNSIGNED_SHORT,
    /// 32-bit signed integer (4 bytes per component).
    Int = gl::INT,
    /// 32-bit unsigned integer (4 bytes per component).
    UnsignedInt = gl::UNSIGNED_INT,
    /// 32-bit floating point (4 bytes per component).
    Float = gl::FLOAT,
    /// 16-bit floating point (2 bytes per component).
    HalfFloat = gl::HALF_FLOAT_ARB,
    /// One bit per pixel, eight pixels to a byte.
    Bitmap = gl::BITMAP,
    /// 3-3-2 bits packed into one byte.
    UnsignedByte332 = gl::UNSIGNED_BYTE_3_3_2,
    /// 4-4-4-4 bits packed into one short.
    UnsignedShort4444 = gl::UNSIGNED_SHORT_4_4_4_4,
    /// 5-5-5-1 bits packed into one short.
    UnsignedShort5551 = gl::UNSIGNED_SHORT_5_5_5_1,
    /// 8-8-8-8 bits packed into one int.
    UnsignedInt8888 = gl::UNSIGNED_INT_8_8_8_8,
    /// 10-10-10-2 bits packed into one int.
    UnsignedInt1010102 = gl::UNSIGNED_INT_10_10_10_2,
    /// 2-3-3 bits, reversed, packed into one byte.
    UnsignedByte233Rev = gl::UNSIGNED_BYTE_2_3_3_REV,
    /// 5-6-5 bits packed into one short.
    UnsignedShort565 = gl::UNSIGNED_SHORT_5_6_5,
    /// 5-6-5 bits, reversed, packed into one short.
    UnsignedShort565Rev = gl::UNSIGNED_SHORT_5_6_5_REV,
    /// 4-4-4-4 bits, reversed, packed into one short.
    UnsignedShort4444Rev = gl::UNSIGNED_SHORT_4_4_4_4_REV,
    /// 1-5-5-5 bits, reversed, packed into one short.
    UnsignedShort1555Rev = gl::UNSIGNED_SHORT_1_5_5_5_REV,
    /// 8-8-8-8 bits, reversed, packed into one int.
    UnsignedInt8888Rev = gl::UNSIGNED_INT_8_8_8_8_REV,
    /// 2-10-10-10 bits, reversed, packed into one int.
    UnsignedInt2101010Rev = gl::UNSIGNED_INT_2_10_10_10_REV,
    /// 24-bit depth + 8-bit stencil in one int.
    UnsignedInt248Nv = gl::UNSIGNED_INT_24_8_NV,
    /// 8-8 bits packed into one short (`APPLE_ycbcr_422`).
    UnsignedShort88Apple = gl::UNSIGNED_SHORT_8_8_APPLE,
    /// 8-8 bits, reversed, packed into one short.
    UnsignedShort88RevApple = gl::UNSIGNED_SHORT_8_8_REV_APPLE,
    /// Signed 8-8 plus unsigned 8-8 bits in one int.
    UnsignedIntS8S888Nv = gl::UNSIGNED_INT_S8_S8_8_8_NV,
    /// Unsigned 8-8 plus signed 8-8 bits, reversed, in one int.
    UnsignedInt88S8S8RevNv = gl::UNSIGNED_INT_8_8_S8_S8_REV_NV,
    /// Small floats 10-11-11, reversed, in one int.
    UnsignedInt10f11f11fRev = gl::UNSIGNED_INT_10F_11F_11F_REV_EXT,
    /// Shared-exponent 5-9-9-9, reversed, in one int.
    UnsignedInt5999Rev = gl::UNSIGNED_INT_5_9_9_9_REV_EXT,
    /// Float depth plus a 24-8 stencil word; counted as 4 bytes.
    Float32UnsignedInt248RevNv = gl::FLOAT_32_UNSIGNED_INT_24_8_REV_NV,
}

impl DataType {
    /// Every recognized data type, in `GLenum` order.
    pub const ALL: [DataType; 29] = [
        Self::Byte,
        Self::UnsignedByte,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Float,
        Self::HalfFloat,
        Self::Bitmap,
        Self::UnsignedByte332,
        Self::UnsignedShort4444,
        Self::UnsignedShort5551,
        Self::UnsignedInt8888,
        Self::UnsignedInt1010102,
        Self::UnsignedByte233Rev,
        Self::UnsignedShort565,
        Self::UnsignedShort565Rev,
        Self::UnsignedShort4444Rev,
        Self::UnsignedShort1555Rev,
        Self::UnsignedInt8888Rev,
        Self::UnsignedInt2101010Rev,
        Self::UnsignedInt248Nv,
        Self::UnsignedShort88Apple,
        Self::UnsignedShort88RevApple,
        Self::UnsignedIntS8S888Nv,
        Self::UnsignedInt88S8S8RevNv,
        Self::UnsignedInt10f11f11fRev,
        Self::UnsignedInt5999Rev,
        Self::Float32UnsignedInt248RevNv,
    ];

    /// Look up a data type by its raw `GLenum`. Returns `None` if unrecognized.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| *t as u32 == raw)
    }

    /// Like [`from_raw`](Self::from_raw), but reports unknown values as
    /// [`SizeError::UnknownType`].
    pub fn try_from_raw(raw: u32) -> Result<Self, SizeError> {
        Self::from_raw(raw).ok_or_else(|| {
            log::debug!("rejecting unknown GL type enum {raw} ({raw:#06x})");
            SizeError::UnknownType(raw)
        })
    }

    /// Raw `GLenum` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Storage class and width.
    pub const fn storage(self) -> Storage {
        match self {
            Self::Byte | Self::UnsignedByte | Self::Bitmap => Storage::Scalar { bytes: 1 },

            Self::Short | Self::UnsignedShort | Self::HalfFloat => Storage::Scalar { bytes: 2 },

            Self::Int | Self::UnsignedInt | Self::Float => Storage::Scalar { bytes: 4 },

            Self::UnsignedByte332 | Self::UnsignedByte233Rev => Storage::Packed { bytes: 1 },

            Self::UnsignedShort565
            | Self::UnsignedShort565Rev
            | Self::UnsignedShort4444
            | Self::UnsignedShort4444Rev
            | Self::UnsignedShort5551
            | Self::UnsignedShort1555Rev
            | Self::UnsignedShort88Apple
            | Self::UnsignedShort88RevApple => Storage::Packed { bytes: 2 },

            Self::UnsignedInt8888
            | Self::UnsignedInt8888Rev
            | Self::UnsignedInt1010102
            | Self::UnsignedInt2101010Rev
            | Self::UnsignedInt248Nv
            | Self::UnsignedIntS8S888Nv
            | Self::UnsignedInt88S8S8RevNv
            | Self::UnsignedInt10f11f11fRev
            | Self::UnsignedInt5999Rev
            | Self::Float32UnsignedInt248RevNv => Storage::Packed { bytes: 4 },
        }
    }

    /// Whether all components share one storage word.
    #[inline]
    pub const fn is_packed(self) -> bool {
        matches!(self.storage(), Storage::Packed { .. })
    }

    /// Whether this is [`DataType::Bitmap`] (eight pixels per byte).
    #[inline]
    pub const fn is_bitmap(self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// GL header name, e.g. `"GL_UNSIGNED_BYTE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "GL_BYTE",
            Self::UnsignedByte => "GL_UNSIGNED_BYTE",
            Self::Short => "GL_SHORT",
            Self::UnsignedShort => "GL_UNSIGNED_SHORT",
            Self::Int => "GL_INT",
            Self::UnsignedInt => "GL_UNSIGNED_INT",
            Self::Float => "GL_FLOAT",
            Self::HalfFloat => "GL_HALF_FLOAT_ARB",
            Self::Bitmap => "GL_BITMAP",
            Self::UnsignedByte332 => "GL_UNSIGNED_BYTE_3_3_2",
            Self::UnsignedShort4444 => "GL_UNSIGNED_SHORT_4_4_4_4",
            Self::UnsignedShort5551 => "GL_UNSIGNED_SHORT_5_5_5_1",
            Self::UnsignedInt8888 => "GL_UNSIGNED_INT_8_8_8_8",
            Self::UnsignedInt1010102 => "GL_UNSIGNED_INT_10_10_10_2",
            Self::UnsignedByte233Rev => "GL_UNSIGNED_BYTE_2_3_3_REV",
            Self::UnsignedShort565 => "GL_UNSIGNED_SHORT_5_6_5",
            Self::UnsignedShort565Rev => "GL_UNSIGNED_SHORT_5_6_5_REV",
            Self::UnsignedShort4444Rev => "GL_UNSIGNED_SHORT_4_4_4_4_REV",
            Self::UnsignedShort1555Rev => "GL_UNSIGNED_SHORT_1_5_5_5_REV",
            Self::UnsignedInt8888Rev => "GL_UNSIGNED_INT_8_8_8_8_REV",
            Self::UnsignedInt2101010Rev => "GL_UNSIGNED_INT_2_10_10_10_REV",
            Self::UnsignedInt248Nv => "GL_UNSIGNED_INT_24_8_NV",
            Self::UnsignedShort88Apple => "GL_UNSIGNED_SHORT_8_8_APPLE",
            Self::UnsignedShort88RevApple => "GL_UNSIGNED_SHORT_8_8_REV_APPLE",
            Self::UnsignedIntS8S888Nv => "GL_UNSIGNED_INT_S8_S8_8_8_NV",
            Self::UnsignedInt88S8S8RevNv => "GL_UNSIGNED_INT_8_8_S8_S8_REV_NV",
            Self::UnsignedInt10f11f11fRev => "GL_UNSIGNED_INT_10F_11F_11F_REV_EXT",
            Self::UnsignedInt5999Rev => "GL_UNSIGNED_INT_5_9_9_9_REV_EXT",
            Self::Float32UnsignedInt248RevNv => "GL_FLOAT_32_UNSIGNED_INT_24_8_REV_NV",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn every_type_roundtrips() {
        for ty in DataType::ALL {
            assert_eq!(DataType::from_raw(ty.raw()), Some(ty));
        }
    }

    #[test]
    fn raw_values_are_unique() {
        let mut raws: Vec<u32> = DataType::ALL.iter().map(|t| t.raw()).collect();
        raws.sort_unstable();
        raws.dedup();
        assert_eq!(raws.len(), DataType::ALL.len());
    }

    #[test]
    fn storage_widths_are_1_2_or_4() {
        for ty in DataType::ALL {
            let bytes = match ty.storage() {
                Storage::Scalar { bytes } | Storage::Packed { bytes } => bytes,
            };
            assert!(matches!(bytes, 1 | 2 | 4), "{ty}");
        }
    }

    #[test]
    fn scalar_widths() {
        assert_eq!(DataType::Byte.storage(), Storage::Scalar { bytes: 1 });
        assert_eq!(DataType::UnsignedByte.storage(), Storage::Scalar { bytes: 1 });
        assert_eq!(DataType::Bitmap.storage(), Storage::Scalar { bytes: 1 });
        assert_eq!(DataType::Short.storage(), Storage::Scalar { bytes: 2 });
        assert_eq!(DataType::HalfFloat.storage(), Storage::Scalar { bytes: 2 });
        assert_eq!(DataType::Int.storage(), Storage::Scalar { bytes: 4 });
        assert_eq!(DataType::Float.storage(), Storage::Scalar { bytes: 4 });
    }

    #[test]
    fn packed_widths() {
        assert_eq!(DataType::UnsignedByte332.storage(), Storage::Packed { bytes: 1 });
        assert_eq!(DataType::UnsignedShort565.storage(), Storage::Packed { bytes: 2 });
        assert_eq!(
            DataType::UnsignedShort88RevApple.storage(),
            Storage::Packed { bytes: 2 }
        );
        assert_eq!(
            DataType::Float32UnsignedInt248RevNv.storage(),
            Storage::Packed { bytes: 4 }
        );
        assert!(DataType::UnsignedInt5999Rev.is_packed());
        assert!(!DataType::Float.is_packed());
    }

    #[test]
    fn packed_unit_ignores_components() {
        let packed = DataType::UnsignedShort565.storage();
        assert_eq!(packed.unit_bytes(1), 2);
        assert_eq!(packed.unit_bytes(3), 2);
        assert_eq!(packed.unit_bytes(5), 2);

        let scalar = DataType::Short.storage();
        assert_eq!(scalar.unit_bytes(3), 6);
    }

    #[test]
    fn only_bitmap_is_bitmap() {
        let bitmaps: Vec<_> = DataType::ALL.iter().filter(|t| t.is_bitmap()).collect();
        assert_eq!(bitmaps, [&DataType::Bitmap]);
    }

    #[test]
    fn unknown_type_rejected() {
        assert_eq!(DataType::from_raw(12345), None);
        assert_eq!(
            DataType::try_from_raw(12345),
            Err(SizeError::UnknownType(12345))
        );
    }

    #[test]
    fn display_uses_gl_names() {
        assert_eq!(format!("{}", DataType::UnsignedByte), "GL_UNSIGNED_BYTE");
        assert_eq!(
            format!("{}", DataType::UnsignedInt10f11f11fRev),
            "GL_UNSIGNED_INT_10F_11F_11F_REV_EXT"
        );
    }

    #[test]
    fn storage_table() {
        use Storage::{Packed, Scalar};
        let table: [(u32, Storage); 29] = [
            (gl::BYTE, Scalar { bytes: 1 }),
            (gl::UNSIGNED_BYTE, Scalar { bytes: 1 }),
            (gl::BITMAP, Scalar { bytes: 1 }),
            (gl::SHORT, Scalar { bytes: 2 }),
            (gl::UNSIGNED_SHORT, Scalar { bytes: 2 }),
            (gl::HALF_FLOAT_ARB, Scalar { bytes: 2 }),
            (gl::INT, Scalar { bytes: 4 }),
            (gl::UNSIGNED_INT, Scalar { bytes: 4 }),
            (gl::FLOAT, Scalar { bytes: 4 }),
            (gl::UNSIGNED_BYTE_3_3_2, Packed { bytes: 1 }),
            (gl::UNSIGNED_BYTE_2_3_3_REV, Packed { bytes: 1 }),
            (gl::UNSIGNED_SHORT_5_6_5, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_5_6_5_REV, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_4_4_4_4, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_4_4_4_4_REV, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_5_5_5_1, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_1_5_5_5_REV, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_8_8_APPLE, Packed { bytes: 2 }),
            (gl::UNSIGNED_SHORT_8_8_REV_APPLE, Packed { bytes: 2 }),
            (gl::UNSIGNED_INT_8_8_8_8, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_8_8_8_8_REV, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_10_10_10_2, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_2_10_10_10_REV, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_24_8_NV, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_S8_S8_8_8_NV, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_8_8_S8_S8_REV_NV, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_10F_11F_11F_REV_EXT, Packed { bytes: 4 }),
            (gl::UNSIGNED_INT_5_9_9_9_REV_EXT, Packed { bytes: 4 }),
            (gl::FLOAT_32_UNSIGNED_INT_24_8_REV_NV, Packed { bytes: 4 }),
        ];
        for (raw, storage) in table {
            let ty = DataType::from_raw(raw).unwrap();
            assert_eq!(ty.storage(), storage, "{ty}");
        }
        // Every entry of ALL is covered exactly once.
        for ty in DataType::ALL {
            let hits = table.iter().filter(|(raw, _)| *raw == ty.raw()).count();
            assert_eq!(hits, 1, "{ty}");
        }
    }
}
