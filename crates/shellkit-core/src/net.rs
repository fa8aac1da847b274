//! Network address helpers

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use crate::result::ResultExt;

/// Best-effort detection of this host's private IP address.
///
/// Opens a UDP socket towards a public address (no packet is sent) and
/// reads back the local address the routing table selected. Falls back to
/// loopback when the host has no usable route.
pub fn private_ip() -> IpAddr {
    fn detect() -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.connect(("8.8.8.8", 80))?;
        Ok(socket.local_addr()?.ip())
    }
    detect().unwrap_or_log(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_ip_is_ipv4_and_not_unspecified() {
        let ip = private_ip();
        assert!(ip.is_ipv4());
        assert!(!ip.is_unspecified());
    }
}
