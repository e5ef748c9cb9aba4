use std::ops::Range;

use super::error::ArtNetError;

/// Bounds-checked writes into an ArtDMX packet buffer.
///
/// Mirrors [`super::reader::ArtNetReader`] so encoding goes through the
/// same `layout` ranges as decoding.
pub struct ArtNetWriter<'a> {
    buf: &'a mut [u8],
}

impl<'a> ArtNetWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), ArtNetError> {
        let capacity = self.buf.len();
        let slot = self.buf.get_mut(offset).ok_or(ArtNetError::OutOfBounds {
            needed: offset + 1,
            capacity,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn write_u16_le(&mut self, range: Range<usize>, value: u16) -> Result<(), ArtNetError> {
        self.write_slice(range, &value.to_le_bytes())
    }

    pub fn write_u16_be(&mut self, range: Range<usize>, value: u16) -> Result<(), ArtNetError> {
        self.write_slice(range, &value.to_be_bytes())
    }

    pub fn write_slice(&mut self, range: Range<usize>, bytes: &[u8]) -> Result<(), ArtNetError> {
        let capacity = self.buf.len();
        let target = self
            .buf
            .get_mut(range.clone())
            .ok_or(ArtNetError::OutOfBounds {
                needed: range.end,
                capacity,
            })?;
        if target.len() != bytes.len() {
            return Err(ArtNetError::OutOfBounds {
                needed: range.start + bytes.len(),
                capacity: range.end,
            });
        }
        target.copy_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ArtNetWriter;

    #[test]
    fn writes_both_byte_orders() {
        let mut buf = [0u8; 4];
        let mut writer = ArtNetWriter::new(&mut buf);
        writer.write_u16_le(0..2, 0x5000).unwrap();
        writer.write_u16_be(2..4, 512).unwrap();
        assert_eq!(buf, [0x00, 0x50, 0x02, 0x00]);
    }

    #[test]
    fn write_past_end_fails() {
        let mut buf = [0u8; 2];
        let mut writer = ArtNetWriter::new(&mut buf);
        let err = writer.write_u8(2, 1).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn slice_length_must_match_range() {
        let mut buf = [0u8; 4];
        let mut writer = ArtNetWriter::new(&mut buf);
        assert!(writer.write_slice(0..4, &[1, 2]).is_err());
    }
}
