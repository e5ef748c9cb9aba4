use super::error::ArtNetError;
use super::layout;
use super::reader::ArtNetReader;

/// Decoded ArtDMX datagram.
#[derive(Debug)]
pub struct ArtDmx {
    pub protocol_version: u16,
    pub universe: u16,
    pub sequence: Option<u8>,
    pub physical: u8,
    pub length: u16,
    pub slots: [u8; layout::DMX_MAX_SLOTS],
}

impl ArtDmx {
    /// Slots actually carried by the datagram.
    pub fn data(&self) -> &[u8] {
        &self.slots[..self.length as usize]
    }
}

/// Decode an ArtDMX datagram.
///
/// Returns `Ok(None)` when the payload is not Art-Net or not an ArtDMX
/// opcode.
///
/// # Examples
/// ```
/// use stagekit_core::{ArtDmxPacket, parse_artdmx};
///
/// let bytes = ArtDmxPacket::filled(7, 10).encode()?;
/// let dmx = parse_artdmx(&bytes)?.expect("artdmx");
/// assert_eq!(dmx.universe, 7);
/// # Ok::<(), stagekit_core::ArtNetError>(())
/// ```
pub fn parse_artdmx(payload: &[u8]) -> Result<Option<ArtDmx>, ArtNetError> {
    let reader = ArtNetReader::new(payload);
    reader.require_len(layout::DMX_DATA_OFFSET)?;

    let signature = reader.read_signature()?;
    if signature != layout::ARTNET_ID {
        return Ok(None);
    }

    let opcode = reader.read_u16_le(layout::OP_CODE_RANGE)?;
    if opcode != layout::ARTDMX_OPCODE {
        return Ok(None);
    }

    let protocol_version = reader.read_u16_be(layout::PROT_VER_RANGE)?;
    let sequence = reader.read_optional_nonzero_u8(layout::SEQUENCE_OFFSET)?;
    let physical = reader.read_u8(layout::PHYSICAL_OFFSET)?;
    let universe = reader.read_u16_le(layout::UNIVERSE_RANGE)?;
    let length = reader.read_u16_be(layout::LENGTH_RANGE)?;
    if length == 0 || length as usize > layout::DMX_MAX_SLOTS {
        return Err(ArtNetError::InvalidLength { length });
    }

    let needed = layout::DMX_DATA_OFFSET + length as usize;
    let data = reader.read_slice(layout::DMX_DATA_OFFSET..needed)?;
    let mut slots = [0u8; layout::DMX_MAX_SLOTS];
    slots[..data.len()].copy_from_slice(data);

    Ok(Some(ArtDmx {
        protocol_version,
        universe,
        sequence,
        physical,
        length,
        slots,
    }))
}
