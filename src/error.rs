//! Error type shared by every sizing, validation, and allocation call.

use crate::limits::LimitExceeded;

/// Errors from data-size resolution, buffer validation, and allocation.
///
/// Each variant carries the offending value or the expected and actual
/// sizes, so a binding layer can surface a useful message to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Format enum is not in the recognized table and is not a legacy
    /// component count (1–4).
    #[error("unknown GL format enum {0} ({0:#06x})")]
    UnknownFormat(u32),
    /// Data type enum is not in the recognized table.
    #[error("unknown GL type enum {0} ({0:#06x})")]
    UnknownType(u32),
    /// Caller-supplied buffer is shorter than the computed requirement.
    #[error(
        "length of specified data doesn't correspond to format and type parameters passed: \
         calculated length {expected}, got {actual}"
    )]
    BufferTooSmall {
        /// Required length in bytes.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// The allocator could not satisfy the request.
    #[error("failed to allocate {requested} bytes")]
    AllocationFailure {
        /// Requested size in bytes.
        requested: usize,
    },
    /// The byte count does not fit in `usize`.
    #[error("data size overflows usize")]
    Overflow,
    /// A configured [`SizeLimits`](crate::SizeLimits) cap was exceeded.
    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_unknown_enums() {
        assert_eq!(
            format!("{}", SizeError::UnknownFormat(0x1234)),
            "unknown GL format enum 4660 (0x1234)"
        );
        assert_eq!(
            format!("{}", SizeError::UnknownType(12345)),
            "unknown GL type enum 12345 (0x3039)"
        );
    }

    #[test]
    fn display_buffer_too_small() {
        let msg = format!(
            "{}",
            SizeError::BufferTooSmall {
                expected: 16,
                actual: 15
            }
        );
        assert!(msg.contains("calculated length 16"));
        assert!(msg.ends_with("got 15"));
    }

    #[test]
    fn limit_converts_and_is_transparent() {
        let limit = LimitExceeded::Bytes {
            actual: 2048,
            max: 1024,
        };
        let err: SizeError = limit.into();
        assert_eq!(err, SizeError::Limit(limit));
        assert_eq!(format!("{err}"), format!("{limit}"));
    }

    #[test]
    fn size_error_is_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&SizeError::Overflow);
    }
}
