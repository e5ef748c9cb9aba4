use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::protocols::artnet::{ArtDmxPacket, ArtNetError};

#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to encode ArtDMX packet: {0}")]
    Encode(#[from] ArtNetError),
    #[error("failed to resolve destination {host}:{port}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("destination {host}:{port} resolved to no addresses")]
    NoAddress { host: String, port: u16 },
    #[error("failed to open UDP socket")]
    Bind(#[source] std::io::Error),
    #[error("failed to send datagram to {addr}")]
    Send {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a single ArtDMX transmission.
#[derive(Debug, Clone, Serialize)]
pub struct SendReport {
    pub destination: SocketAddr,
    pub universe: u16,
    pub value: u8,
    pub bytes_sent: usize,
}

/// Send one ArtDMX packet with every channel of `universe` set to `value`.
///
/// Fire-and-forget: the socket is closed as soon as the datagram has been
/// handed to the OS, and nothing is awaited from the receiver.
///
/// # Examples
/// ```no_run
/// use stagekit_core::{ARTNET_PORT, send_artnet};
///
/// let report = send_artnet("192.168.1.50", ARTNET_PORT, 0, 255)?;
/// assert_eq!(report.bytes_sent, 530);
/// # Ok::<(), stagekit_core::SendError>(())
/// ```
pub fn send_artnet(
    host: &str,
    port: u16,
    universe: u16,
    value: u8,
) -> Result<SendReport, SendError> {
    let packet = ArtDmxPacket::filled(universe, value).encode()?;
    let addr = resolve(host, port)?;

    let bind_addr: SocketAddr = if addr.is_ipv4() {
        SocketAddr::from(([0, 0, 0, 0], 0))
    } else {
        SocketAddr::from(([0u16; 8], 0))
    };
    let socket = UdpSocket::bind(bind_addr).map_err(SendError::Bind)?;
    if is_limited_broadcast(&addr) {
        socket.set_broadcast(true).map_err(SendError::Bind)?;
    }
    debug!(%addr, local = ?socket.local_addr().ok(), "sending ArtDMX");

    let bytes_sent = socket
        .send_to(&packet, addr)
        .map_err(|source| SendError::Send { addr, source })?;
    info!(%addr, universe, value, bytes_sent, "ArtDMX sent");

    Ok(SendReport {
        destination: addr,
        universe,
        value,
        bytes_sent,
    })
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr, SendError> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|source| SendError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?;
    addrs.next().ok_or_else(|| SendError::NoAddress {
        host: host.to_string(),
        port,
    })
}

fn is_limited_broadcast(addr: &SocketAddr) -> bool {
    match addr {
        SocketAddr::V4(v4) => v4.ip().is_broadcast(),
        SocketAddr::V6(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use super::send_artnet;

    #[test]
    fn sends_one_full_universe() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let port = receiver.local_addr().unwrap().port();

        let report = send_artnet("127.0.0.1", port, 5, 200).unwrap();
        assert_eq!(report.bytes_sent, 530);
        assert_eq!(report.destination.port(), port);

        let mut buf = [0u8; 1024];
        let (len, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(len, 530);
        assert_eq!(u16::from_le_bytes([buf[14], buf[15]]), 5);
        assert!(buf[18..len].iter().all(|&b| b == 200));
    }
}
