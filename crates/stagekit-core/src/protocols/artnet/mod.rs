//! Art-Net protocol encoding and decoding.
//!
//! Only ArtDMX is supported. Byte offsets and protocol constants live in
//! `layout`; `writer` and `reader` own all byte access so `packet` (encode)
//! and `parser` (decode) never index buffers directly. An encoded packet
//! always carries a full universe: 18 header bytes and 512 slots.

pub mod error;
pub mod layout;
pub mod packet;
pub mod parser;
pub mod reader;
pub mod writer;

pub use error::ArtNetError;
pub use packet::ArtDmxPacket;
pub use parser::{ArtDmx, parse_artdmx};
