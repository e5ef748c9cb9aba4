//! UDP transmission of ArtDMX packets.

mod sender;

pub use sender::{SendError, SendReport, send_artnet};
