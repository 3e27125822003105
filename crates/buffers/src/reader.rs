//! Binary buffer reader with cursor tracking.

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position and provides methods for reading
/// the integer shapes that appear in beacon advertisement layouts. Callers
/// are expected to length-check a frame before reading; the reader itself
/// indexes the underlying slice directly.
///
/// # Example
///
/// ```
/// use ubeacon_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), 0x01);
/// assert_eq!(reader.u16(), 0x0203);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub data: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.x = 0;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.data.len() - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> u8 {
        self.data[self.x]
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) {
        self.x += length;
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> &'a [u8] {
        let x = self.x;
        let end = x + size;
        let bin = &self.data[x..end];
        self.x = end;
        bin
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> u8 {
        let val = self.data[self.x];
        self.x += 1;
        val
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> i8 {
        let val = self.data[self.x] as i8;
        self.x += 1;
        val
    }

    /// Reads a big-endian unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self) -> u16 {
        let val = u16::from_be_bytes([self.data[self.x], self.data[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a big-endian signed 16-bit integer.
    #[inline]
    pub fn i16(&mut self) -> i16 {
        let val = i16::from_be_bytes([self.data[self.x], self.data[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a little-endian unsigned 16-bit integer.
    #[inline]
    pub fn u16_le(&mut self) -> u16 {
        let val = u16::from_le_bytes([self.data[self.x], self.data[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a little-endian signed 16-bit integer.
    #[inline]
    pub fn i16_le(&mut self) -> i16 {
        let val = i16::from_le_bytes([self.data[self.x], self.data[self.x + 1]]);
        self.x += 2;
        val
    }

    /// Reads a little-endian unsigned 32-bit integer.
    #[inline]
    pub fn u32_le(&mut self) -> u32 {
        let val = u32::from_le_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        val
    }
}
