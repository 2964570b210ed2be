//! Owned byte buffers for data handed back to the caller.

use alloc::vec::Vec;
use core::fmt;

use crate::error::SizeError;
use crate::limits::SizeLimits;

// ---------------------------------------------------------------------------
// DataBuffer
// ---------------------------------------------------------------------------

/// Owned byte buffer of a fixed length.
///
/// Returned by [`allocate_buffer`] for GL read-back calls to fill in.
/// Contents are unspecified until the caller writes them.
#[derive(Clone, PartialEq, Eq)]
pub struct DataBuffer {
    data: Vec<u8>,
}

impl DataBuffer {
    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is zero bytes long.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the bytes mutably.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take ownership of the underlying `Vec`.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for DataBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for DataBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for DataBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl fmt::Debug for DataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataBuffer({} bytes)", self.data.len())
    }
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

/// Allocate a buffer of exactly `size` bytes.
///
/// # Errors
///
/// [`SizeError::AllocationFailure`] if the allocator cannot satisfy the
/// request. Never aborts on out-of-memory.
pub fn allocate_buffer(size: usize) -> Result<DataBuffer, SizeError> {
    let mut data = Vec::<u8>::new();
    if data.try_reserve_exact(size).is_err() {
        log::debug!("allocation of {size} bytes failed");
        return Err(SizeError::AllocationFailure { requested: size });
    }
    // Capacity is reserved, so this cannot reallocate.
    data.resize(size, 0);
    Ok(DataBuffer { data })
}

/// [`allocate_buffer`], refusing sizes above `limits.max_bytes`.
pub fn allocate_buffer_with_limits(
    size: usize,
    limits: &SizeLimits,
) -> Result<DataBuffer, SizeError> {
    limits.check_bytes(size)?;
    allocate_buffer(size)
}
