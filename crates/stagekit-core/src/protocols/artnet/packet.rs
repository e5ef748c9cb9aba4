use super::error::ArtNetError;
use super::layout;
use super::writer::ArtNetWriter;

/// Outbound ArtDMX packet for one full universe.
///
/// # Examples
/// ```
/// use stagekit_core::ArtDmxPacket;
///
/// let packet = ArtDmxPacket::filled(3, 255);
/// let bytes = packet.encode()?;
/// assert_eq!(bytes.len(), 530);
/// assert_eq!(&bytes[..8], b"Art-Net\0");
/// # Ok::<(), stagekit_core::ArtNetError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtDmxPacket {
    pub universe: u16,
    /// 0 disables sequencing on the receiver side.
    pub sequence: u8,
    pub physical: u8,
    pub slots: [u8; layout::DMX_MAX_SLOTS],
}

impl ArtDmxPacket {
    /// Every channel of `universe` set to `value`, sequencing disabled.
    pub fn filled(universe: u16, value: u8) -> Self {
        Self {
            universe,
            sequence: 0,
            physical: 0,
            slots: [value; layout::DMX_MAX_SLOTS],
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ArtNetError> {
        let mut buf = vec![0u8; layout::PACKET_LEN];
        let mut writer = ArtNetWriter::new(&mut buf);
        writer.write_slice(layout::ID_RANGE, layout::ARTNET_ID)?;
        writer.write_u16_le(layout::OP_CODE_RANGE, layout::ARTDMX_OPCODE)?;
        writer.write_u16_be(layout::PROT_VER_RANGE, layout::PROTOCOL_VERSION)?;
        writer.write_u8(layout::SEQUENCE_OFFSET, self.sequence)?;
        writer.write_u8(layout::PHYSICAL_OFFSET, self.physical)?;
        writer.write_u16_le(layout::UNIVERSE_RANGE, self.universe)?;
        writer.write_u16_be(layout::LENGTH_RANGE, layout::DMX_MAX_SLOTS as u16)?;
        writer.write_slice(layout::DMX_DATA_OFFSET..layout::PACKET_LEN, &self.slots)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::ArtDmxPacket;
    use crate::protocols::artnet::layout;

    #[test]
    fn encoded_layout_matches_artdmx() {
        let bytes = ArtDmxPacket::filled(0x0102, 42).encode().unwrap();
        assert_eq!(bytes.len(), 530);
        assert_eq!(&bytes[0..8], b"Art-Net\0");
        assert_eq!(u16::from_le_bytes([bytes[8], bytes[9]]), 0x5000);
        assert_eq!(u16::from_be_bytes([bytes[10], bytes[11]]), 14);
        assert_eq!(bytes[12], 0);
        assert_eq!(bytes[13], 0);
        assert_eq!(&bytes[14..16], &[0x02, 0x01]);
        assert_eq!(u16::from_be_bytes([bytes[16], bytes[17]]), 512);
        assert!(bytes[18..].iter().all(|&b| b == 42));
    }

    #[test]
    fn length_is_constant_across_universes_and_values() {
        for (universe, value) in [(0u16, 0u8), (1, 1), (32767, 128), (u16::MAX, 255)] {
            let bytes = ArtDmxPacket::filled(universe, value).encode().unwrap();
            assert_eq!(bytes.len(), layout::PACKET_LEN);
            assert_eq!(
                u16::from_le_bytes([bytes[14], bytes[15]]),
                universe,
                "universe {universe}"
            );
            assert!(bytes[layout::DMX_DATA_OFFSET..].iter().all(|&b| b == value));
        }
    }
}
