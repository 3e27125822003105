//! Binary buffer writer over an auto-growing buffer.

/// A binary buffer writer that appends to an internal growable buffer.
///
/// # Example
///
/// ```
/// use ubeacon_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0xFF);
/// writer.u16_le(0x0118);
/// assert_eq!(writer.flush(), vec![0xFF, 0x18, 0x01]);
/// ```
pub struct Writer {
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Clears the buffer without releasing its allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.buf.push(val as u8);
    }

    /// Writes a big-endian unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a big-endian signed 16-bit integer.
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a little-endian unsigned 16-bit integer.
    #[inline]
    pub fn u16_le(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a little-endian signed 16-bit integer.
    #[inline]
    pub fn i16_le(&mut self, val: i16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a little-endian unsigned 32-bit integer.
    #[inline]
    pub fn u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a raw byte slice.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Consumes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}
