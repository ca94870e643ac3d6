//! IPv4 subnet calculations
//!
//! The subnet is given either in CIDR notation (`10.0.0.1/8`), as an
//! address plus mask, or as a bare address, in which case the classful mask
//! of the address is used. A mask with the top bit set is a netmask
//! (`255.255.255.0`), anything else is a hostmask (`0.0.0.255`).

use std::fmt::{self, Display, Formatter};

use thiserror::Error;
use toolshed_util::scan::scan_uint;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpInfoError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid mask: {0}")]
    InvalidMask(String),
    #[error("prefix length out of range: {0}")]
    PrefixOutOfRange(u32),
    #[error("a mask cannot be given together with a prefix length")]
    MaskWithPrefix,
}

/// Address classes from the classful routing days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    A,
    B,
    C,
    D,
    E,
}

impl Class {
    pub fn of(address: u32) -> Self {
        match address >> 28 {
            0x0..=0x7 => Class::A,
            0x8..=0xb => Class::B,
            0xc..=0xd => Class::C,
            0xe => Class::D,
            _ => Class::E,
        }
    }

    /// Classful hostmask; D and E have no host part
    pub const fn hostmask(self) -> u32 {
        match self {
            Class::A => 0x00ff_ffff,
            Class::B => 0x0000_ffff,
            Class::C => 0x0000_00ff,
            Class::D | Class::E => 0,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Class::A => 'A',
            Class::B => 'B',
            Class::C => 'C',
            Class::D => 'D',
            Class::E => 'E',
        }
    }
}

/// Which role an address plays inside its subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Network,
    Broadcast,
    Host,
}

/// An address together with the subnet it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpInfo {
    address: u32,
    prefix: u32,
}

impl IpInfo {
    /// # Panics
    ///
    /// If `prefix` is larger than 32.
    pub fn new(address: u32, prefix: u32) -> Self {
        assert!(prefix <= 32, "prefix length {prefix} > 32");
        Self { address, prefix }
    }

    /// Parse the command line form: `ADDRESS[/PREFIX] [MASK]`
    ///
    /// ```
    /// use toolshed::ipinfo::IpInfo;
    ///
    /// let info = IpInfo::parse("172.16.3.7", Some("255.255.240.0")).unwrap();
    /// assert_eq!(info.prefix(), 20);
    /// assert_eq!(info.network(), 0xac10_0000);
    /// assert!(info.is_private());
    /// ```
    pub fn parse(address: &str, mask: Option<&str>) -> Result<Self, IpInfoError> {
        let invalid_address = || IpInfoError::InvalidAddress(address.to_owned());

        let (addr, len) = scan_ipv4(address).ok_or_else(invalid_address)?;
        let prefix = match &address[len..] {
            "" => None,
            rest => {
                let digits = rest.strip_prefix('/').ok_or_else(invalid_address)?;
                let (prefix, len) = scan_uint(digits).ok_or_else(invalid_address)?;
                if len != digits.len() {
                    return Err(invalid_address());
                }
                Some(prefix)
            }
        };

        let hostmask = match (prefix, mask) {
            (Some(_), Some(_)) => return Err(IpInfoError::MaskWithPrefix),
            (Some(prefix), None) if prefix > 32 => {
                return Err(IpInfoError::PrefixOutOfRange(prefix))
            }
            (Some(prefix), None) => return Ok(Self::new(addr, prefix)),
            (None, Some(mask)) => match scan_ipv4(mask) {
                Some((m, len)) if len == mask.len() && m & 0x8000_0000 != 0 => !m,
                Some((m, len)) if len == mask.len() => m,
                _ => return Err(IpInfoError::InvalidMask(mask.to_owned())),
            },
            (None, None) => Class::of(addr).hostmask(),
        };

        // Only 2^k - 1 is a hostmask
        if hostmask & hostmask.wrapping_add(1) != 0 {
            return Err(IpInfoError::InvalidMask(mask.unwrap_or(address).to_owned()));
        }

        Ok(Self::new(addr, hostmask.leading_zeros()))
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    /// Number of network bits
    pub fn prefix(&self) -> u32 {
        self.prefix
    }

    pub fn hostmask(&self) -> u32 {
        u32::MAX.checked_shr(self.prefix).unwrap_or(0)
    }

    pub fn netmask(&self) -> u32 {
        !self.hostmask()
    }

    pub fn network(&self) -> u32 {
        self.address & self.netmask()
    }

    pub fn broadcast(&self) -> u32 {
        self.address | self.hostmask()
    }

    /// Usable host addresses in the subnet, i.e. without network and
    /// broadcast address
    ///
    /// Computed modulo 2^32 like the classic tools do, so a /32 yields
    /// 4294967295.
    pub fn max_hosts(&self) -> u32 {
        self.hostmask().wrapping_sub(1)
    }

    pub fn class(&self) -> Class {
        Class::of(self.address)
    }

    pub fn role(&self) -> Role {
        if self.address == self.network() {
            Role::Network
        } else if self.address == self.broadcast() {
            Role::Broadcast
        } else {
            Role::Host
        }
    }

    /// Inside 10.0.0.0/8, 172.16.0.0/12 or 192.168.0.0/16
    pub fn is_private(&self) -> bool {
        let high = self.address >> 16;
        high & 0xff00 == 10 << 8 || high & 0xfff0 == (172 << 8) + 16 || high == (192 << 8) + 168
    }
}

/// Scan a dotted quad at the start of `s`
fn scan_ipv4(s: &str) -> Option<(u32, usize)> {
    let mut addr = 0u32;
    let mut pos = 0;
    for i in 0..4 {
        if i > 0 {
            s[pos..].strip_prefix('.')?;
            pos += 1;
        }
        let (octet, len) = scan_uint(&s[pos..])?;
        if octet > 255 {
            return None;
        }
        addr = (addr << 8) | octet;
        pos += len;
    }
    Some((addr, pos))
}

pub fn fmt_ipv4(addr: u32) -> String {
    let [a, b, c, d] = addr.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Dotted quad, padded to a column, followed by the bits of `addr`
///
/// Octets are separated by `.`, the prefix boundary is marked by `/`.
fn fmt_bits(addr: u32, prefix: u32) -> String {
    let mut out = format!("{:<17}", fmt_ipv4(addr));
    for bit in (0..32).rev() {
        out.push(if addr >> bit & 1 == 1 { '1' } else { '0' });
        if bit == 32 - prefix {
            out.push('/');
        } else if matches!(bit, 24 | 16 | 8) {
            out.push('.');
        }
    }
    out
}

/// Ruler matching the bits of [fmt_bits]
fn fmt_ruler(prefix: u32) -> String {
    let mut out = String::with_capacity(35);
    for pos in 1..=32 {
        out.push('-');
        if pos == prefix {
            out.push('/');
        } else if matches!(pos, 8 | 16 | 24) {
            out.push('+');
        }
    }
    out
}

/// The report printed by `toolshed ipinfo`, ending in an empty line
impl Display for IpInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix;
        let role = match self.role() {
            Role::Network => "network",
            Role::Broadcast => "broadcast",
            Role::Host => "host",
        };

        let mut head = format!("Class {} | CIDR {prefix} {role} address", self.class().letter());
        if self.is_private() {
            head.push_str(", private");
        }
        writeln!(f, "{head}")?;
        writeln!(f, "Address:    {}", fmt_bits(self.address, prefix))?;
        writeln!(f, "Netmask:    {} {prefix:3}", fmt_bits(self.netmask(), prefix))?;
        writeln!(f, "Hostmask:   {} {:3}", fmt_bits(self.hostmask(), prefix), 32 - prefix)?;

        writeln!(f, "MaxHosts:   {:<17}{}", self.max_hosts(), fmt_ruler(prefix))?;

        writeln!(f, "Network:    {} min", fmt_bits(self.network(), prefix))?;
        writeln!(f, "Broadcast:  {} max", fmt_bits(self.broadcast(), prefix))?;
        writeln!(f)
    }
}
