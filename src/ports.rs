use std::net::{Ipv4Addr, SocketAddrV4, TcpListener};

/// Upper bound on the linear scan in [`find_free_port`].
pub const MAX_PORT_SCAN: u16 = 200;

/// Whether the port can currently be bound on loopback.
pub fn is_port_free(port: u16) -> bool {
    TcpListener::bind(SocketAddrV4::new(Ipv4Addr::LOCALHOST, port)).is_ok()
}

/// First free port at or after `start`, scanning at most [`MAX_PORT_SCAN`]
/// candidates. `None` when the scan range is exhausted.
pub fn find_free_port(start: u16) -> Option<u16> {
    (0..MAX_PORT_SCAN)
        .filter_map(|offset| start.checked_add(offset))
        .find(|&port| is_port_free(port))
}
