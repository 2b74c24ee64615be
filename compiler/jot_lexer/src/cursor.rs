//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte and only ever moves
//! forward. End-of-source is detected when the current byte equals the
//! sentinel (`0x00`) and the position has reached the source length; no
//! explicit bounds checking is performed in the common case, the sentinel
//! guarantees safe termination.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from end-of-source by comparing `pos` against
//! `source_len`. A null at `pos < source_len` is an interior null (the
//! scanner turns it into an error token); a null at `pos >= source_len` is
//! the sentinel.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel), and all bytes after it
    /// must also be `0x00`. This is guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` when at end-of-source (the sentinel byte). Interior
    /// null bytes also return `0x00`; use [`is_eof()`](Self::is_eof) to
    /// distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current without consuming it.
    ///
    /// Safe to call at any position: the sentinel and cache-line padding
    /// guarantee valid reads beyond the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the current byte only if it equals `expected`.
    ///
    /// Returns `true` (and advances) on a match, `false` (cursor unmoved)
    /// otherwise. This is the single-byte lookahead-and-consume primitive
    /// used to fold `!=`, `==`, `<=`, and `>=` into one token.
    ///
    /// # Contract
    ///
    /// `expected` must be nonzero; matching the sentinel would walk the
    /// cursor into the padding region.
    #[inline]
    pub fn match_byte(&mut self, expected: u8) -> bool {
        debug_assert!(expected != 0, "cannot match the sentinel byte");
        if self.buf[self.pos as usize] == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the cursor has reached end-of-source.
    ///
    /// End-of-source is when the current byte is the sentinel (`0x00`) and
    /// the position is at or past the source length. This distinguishes
    /// end-of-source from interior null bytes.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content (`end <= source_len`)
    /// and on valid UTF-8 character boundaries. This is guaranteed when
    /// `start` and `end` come from the scanner's token boundary tracking,
    /// since the source was originally valid UTF-8 (`&str`).
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: The buffer was constructed from `&str` (valid UTF-8) and
        // the scanner ensures start..end falls on character boundaries
        // within the source content.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    /// This holds for all the scanner's classification predicates.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or end-of-source using SIMD search.
    ///
    /// Used to skip `//` comment bodies. Scans only within source content
    /// (never into sentinel/padding) and leaves the cursor ON the newline,
    /// so the caller's newline handling still sees it. If no newline is
    /// found, the cursor is left at the end-of-source sentinel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for end-of-source.
    ///
    /// "Interesting" bytes for strings: `"` (terminator), `\` (escape),
    /// `\n` (line counting; strings may span lines). Uses `memchr3` for
    /// SIMD-accelerated search. The cursor is left ON the found byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr3(b'"', b'\\', b'\n', remaining) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0 // end-of-source sentinel
        }
    }
}
