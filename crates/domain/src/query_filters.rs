use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const PRIVATE_IPV4_RANGES: &[(u8, u8, u8, u8, u8)] = &[
    (10, 0, 0, 0, 8),
    (172, 16, 0, 0, 12),
    (127, 0, 0, 0, 8),
    (0, 0, 0, 0, 8),
    (192, 168, 0, 0, 16),
];

// fc00::/7 already covers fd00::/8.
const PRIVATE_IPV6_RANGES: &[(u16, u8)] = &[
    (0xfe80, 10),
    (0xfc00, 7),
];

/// Addresses that never geolocate to a meaningful country.
pub struct PrivateIpFilter;

impl PrivateIpFilter {
    pub fn is_private_ip(ip: &IpAddr) -> bool {
        match ip {
            IpAddr::V4(ipv4) => Self::is_private_ipv4(ipv4),
            IpAddr::V6(ipv6) => Self::is_private_ipv6(ipv6),
        }
    }

    /// Parses `value` and checks it. Text that is not an IP address is
    /// reported as `None`.
    pub fn is_private_str(value: &str) -> Option<bool> {
        value
            .parse::<IpAddr>()
            .ok()
            .map(|ip| Self::is_private_ip(&ip))
    }

    fn is_private_ipv4(ip: &Ipv4Addr) -> bool {
        let octets = ip.octets();
        PRIVATE_IPV4_RANGES
            .iter()
            .any(|(a, b, c, d, mask)| Self::matches_ipv4_range(octets, (*a, *b, *c, *d), *mask))
    }

    fn is_private_ipv6(ip: &Ipv6Addr) -> bool {
        if ip.is_loopback() {
            return true;
        }
        let first = ip.segments()[0];
        PRIVATE_IPV6_RANGES
            .iter()
            .any(|(network, mask)| Self::matches_ipv6_prefix(first, *network, *mask))
    }

    fn matches_ipv4_range(ip: [u8; 4], network: (u8, u8, u8, u8), mask: u8) -> bool {
        let shift = 32 - mask;
        let ip_int = u32::from_be_bytes(ip);
        let net_int = u32::from_be_bytes([network.0, network.1, network.2, network.3]);
        (ip_int >> shift) == (net_int >> shift)
    }

    fn matches_ipv6_prefix(first_segment: u16, network: u16, mask: u8) -> bool {
        let shift = 16 - mask;
        (first_segment >> shift) == (network >> shift)
    }
}
