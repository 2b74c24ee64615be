//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect end-of-source without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment, which also provides safe padding for
//! [`Cursor::peek`](crate::Cursor::peek) near the end of the buffer.
//!
//! An empty source is valid and yields a buffer whose first byte is the
//! sentinel: the first scan call immediately reports end-of-source.
//! Interior `0x00` bytes in the source are NOT end-of-source; the cursor
//! distinguishes them by position (see [`Cursor::is_eof`](crate::Cursor::is_eof))
//! and the scanner reports them as unexpected characters.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`. All subsequent bytes
/// (cache-line padding) are also `0x00`, ensuring safe lookahead reads near
/// the end of the buffer.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Copies the source bytes into a cache-line-aligned buffer with a
    /// `0x00` sentinel byte appended. The buffer must remain alive and
    /// unmodified for as long as any [`Cursor`] or token borrowed from it.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates at `u32::MAX`; callers are expected to reject
    /// oversized files upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled, then copy source bytes. The sentinel
        // (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        // Warm up L1 for the scanner's initial reads.
        prefetch_buffer(&buf);

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Hint the CPU to prefetch the first cache lines of the buffer.
///
/// On platforms without prefetch support this is a no-op.
#[allow(
    unsafe_code,
    reason = "prefetch intrinsic; a pure performance hint with no observable effect"
)]
fn prefetch_buffer(buf: &[u8]) {
    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: `_mm_prefetch` is a hint instruction; the CPU silently
        // ignores requests for unmapped addresses. Every offset below points
        // within the allocated Vec (padded_len is a multiple of 64, >= 64).
        unsafe {
            use std::arch::x86_64::_mm_prefetch;
            let p = buf.as_ptr().cast::<i8>();
            _mm_prefetch::<3>(p); // _MM_HINT_T0: all cache levels
            if buf.len() >= 128 {
                _mm_prefetch::<3>(p.add(64));
            }
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    let _ = buf;
}
