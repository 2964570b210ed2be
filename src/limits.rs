//! Size limits for data buffers.
//!
//! [`SizeLimits`] caps element counts and byte sizes. [`LimitExceeded`]
//! is returned when a check fails. Bindings that size buffers from
//! untrusted script input can reject absurd requests before allocating.

/// Caps on element counts and buffer sizes.
///
/// All fields are optional; `None` means no limit for that resource.
///
/// # Example
///
/// ```
/// use gldatasize::SizeLimits;
///
/// let limits = SizeLimits::none()
///     .with_max_elements(16_777_216)
///     .with_max_bytes(256 * 1024 * 1024);
/// assert!(limits.has_any());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct SizeLimits {
    /// Maximum number of pixels or vertices in one request.
    pub max_elements: Option<usize>,
    /// Maximum buffer size in bytes.
    pub max_bytes: Option<usize>,
}

impl SizeLimits {
    /// No limits (all fields `None`).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set maximum element count.
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Set maximum buffer size in bytes.
    pub fn with_max_bytes(mut self, bytes: usize) -> Self {
        self.max_bytes = Some(bytes);
        self
    }

    /// Whether any limits are set.
    pub fn has_any(&self) -> bool {
        self.max_elements.is_some() || self.max_bytes.is_some()
    }

    /// Check an element count against `max_elements`.
    pub fn check_elements(&self, count: usize) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_elements
            && count > max
        {
            log::debug!("element count {count} exceeds limit {max}");
            return Err(LimitExceeded::Elements { actual: count, max });
        }
        Ok(())
    }

    /// Check a byte size against `max_bytes`.
    pub fn check_bytes(&self, bytes: usize) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_bytes
            && bytes > max
        {
            log::debug!("buffer size {bytes} bytes exceeds limit {max}");
            return Err(LimitExceeded::Bytes { actual: bytes, max });
        }
        Ok(())
    }
}

/// A size limit was exceeded.
///
/// Each variant carries the actual value and the limit that was exceeded.
/// Converts into [`SizeError::Limit`](crate::SizeError::Limit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LimitExceeded {
    /// Element count exceeded `max_elements`.
    #[error("element count {actual} exceeds limit {max}")]
    Elements {
        /// Requested element count.
        actual: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Byte size exceeded `max_bytes`.
    #[error("buffer size {actual} bytes exceeds limit {max}")]
    Bytes {
        /// Requested size in bytes.
        actual: usize,
        /// Maximum allowed.
        max: usize,
    },
}
