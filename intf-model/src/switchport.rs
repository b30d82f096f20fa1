//! Switchport variants layered on top of [`InterfaceRecord`].
//!
//! Tickets describe the port with a single compound descriptor:
//!
//! | descriptor        | result                                           |
//! |-------------------|--------------------------------------------------|
//! | `access:100`      | access port, native VLAN 100                     |
//! | `access:`         | access port, no VLAN                             |
//! | `trunk:100:10,20` | trunk, native VLAN 100, allowed `10,20`          |
//! | `trunk::`         | trunk, no native VLAN, empty allowed list        |
//! | `l3:`             | routed port, not a switchport                    |

use std::net::Ipv4Addr;

use ipnetwork::{ipv4_mask_to_prefix, Ipv4Network};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;
use crate::interface::InterfaceRecord;
use crate::ticket::{describe, is_unset, FieldAliases, FromTicket, RawTicket};
use crate::vlan::{AllowedVlans, VlanId};

/// Layer-2 switchport mode. Routed ports have no mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchportMode {
    Access,
    Trunk,
}

/// Port configuration parsed from the switchport descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchportConfig {
    Access {
        native_vlan: Option<VlanId>,
    },
    Trunk {
        native_vlan: Option<VlanId>,
        allowed_vlans: AllowedVlans,
    },
    Layer3,
}

impl SwitchportConfig {
    /// Parse a `<mode>:<rest>` descriptor. `field` is used in error reports.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let Some((mode, rest)) = raw.split_once(':') else {
            return Err(malformed(field, raw));
        };

        match mode.trim().to_ascii_lowercase().as_str() {
            "l3" => Ok(Self::Layer3),
            "access" => Ok(Self::Access {
                native_vlan: optional_vlan(field, rest)?,
            }),
            "trunk" => {
                let mut parts = rest.split(':');
                let (Some(native), Some(allowed), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(malformed(field, raw));
                };
                Ok(Self::Trunk {
                    native_vlan: optional_vlan(field, native)?,
                    allowed_vlans: AllowedVlans::parse(field, allowed)?,
                })
            }
            _ => Err(ValidationError::InvalidSwitchportMode {
                field: field.to_string(),
                value: mode.to_string(),
            }),
        }
    }

    /// `None` for routed (layer-3) ports.
    pub fn mode(&self) -> Option<SwitchportMode> {
        match self {
            Self::Access { .. } => Some(SwitchportMode::Access),
            Self::Trunk { .. } => Some(SwitchportMode::Trunk),
            Self::Layer3 => None,
        }
    }

    pub fn native_vlan(&self) -> Option<VlanId> {
        match self {
            Self::Access { native_vlan } | Self::Trunk { native_vlan, .. } => *native_vlan,
            Self::Layer3 => None,
        }
    }

    pub fn allowed_vlans(&self) -> Option<&AllowedVlans> {
        match self {
            Self::Trunk { allowed_vlans, .. } => Some(allowed_vlans),
            _ => None,
        }
    }

    pub fn is_layer3(&self) -> bool {
        matches!(self, Self::Layer3)
    }

    /// Canonical descriptor text that parses back to `self`.
    pub fn descriptor(&self) -> String {
        let vlan = |v: &Option<VlanId>| v.map(|id| id.to_string()).unwrap_or_default();
        match self {
            Self::Access { native_vlan } => format!("access:{}", vlan(native_vlan)),
            Self::Trunk {
                native_vlan,
                allowed_vlans,
            } => format!("trunk:{}:{}", vlan(native_vlan), allowed_vlans),
            Self::Layer3 => "l3:".to_string(),
        }
    }
}

/// Interface record extended with switchport and IPv4 settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchportRecord {
    interface: InterfaceRecord,
    switchport: SwitchportConfig,
    ip4_address: Option<Ipv4Network>,
}

impl SwitchportRecord {
    pub fn interface(&self) -> &InterfaceRecord {
        &self.interface
    }

    pub fn switchport(&self) -> &SwitchportConfig {
        &self.switchport
    }

    pub fn mode(&self) -> Option<SwitchportMode> {
        self.switchport.mode()
    }

    pub fn native_vlan(&self) -> Option<VlanId> {
        self.switchport.native_vlan()
    }

    pub fn allowed_vlans(&self) -> Option<&AllowedVlans> {
        self.switchport.allowed_vlans()
    }

    /// Address and prefix length. Not cross-checked against the port mode.
    pub fn ip4_address(&self) -> Option<Ipv4Network> {
        self.ip4_address
    }

    /// Emit the record as a ticket keyed by [`FieldAliases::normalized`].
    pub fn to_normalized_ticket(&self) -> RawTicket {
        let aliases = FieldAliases::normalized();
        let ticket = self
            .interface
            .to_normalized_ticket()
            .with(aliases.switchport, self.switchport.descriptor());
        match self.ip4_address {
            Some(net) => ticket.with(aliases.ip4_address, net.to_string()),
            None => ticket,
        }
    }
}

impl FromTicket for SwitchportRecord {
    fn from_ticket(ticket: &RawTicket, aliases: &FieldAliases) -> Result<Self, ValidationError> {
        let switchport = match ticket.get(aliases.switchport) {
            Some(Value::String(raw)) => SwitchportConfig::parse(aliases.switchport, raw)?,
            other => {
                return Err(malformed(
                    aliases.switchport,
                    &other.map(describe).unwrap_or_default(),
                ))
            }
        };
        let interface = InterfaceRecord::from_ticket(ticket, aliases)?;
        let ip4_address = match ticket.get(aliases.ip4_address) {
            raw if is_unset(raw) => None,
            Some(Value::String(raw)) => Some(parse_ip4_interface(aliases.ip4_address, raw)?),
            Some(other) => {
                return Err(invalid_ip(
                    aliases.ip4_address,
                    &describe(other),
                    "expected a string",
                ))
            }
            None => None,
        };

        Ok(Self {
            interface,
            switchport,
            ip4_address,
        })
    }
}

impl Serialize for SwitchportRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flat<'a> {
            #[serde(flatten)]
            interface: &'a InterfaceRecord,
            #[serde(skip_serializing_if = "Option::is_none")]
            mode: Option<SwitchportMode>,
            #[serde(skip_serializing_if = "Option::is_none")]
            native_vlan: Option<VlanId>,
            #[serde(skip_serializing_if = "Option::is_none")]
            allowed_vlans: Option<&'a AllowedVlans>,
            #[serde(skip_serializing_if = "Option::is_none")]
            ip4_address: Option<String>,
        }

        Flat {
            interface: &self.interface,
            mode: self.mode(),
            native_vlan: self.native_vlan(),
            allowed_vlans: self.allowed_vlans(),
            ip4_address: self.ip4_address.map(|net| net.to_string()),
        }
        .serialize(serializer)
    }
}

/// Parse `a.b.c.d`, `a.b.c.d/len` or `a.b.c.d/netmask`.
pub fn parse_ip4_interface(field: &str, raw: &str) -> Result<Ipv4Network, ValidationError> {
    let text = raw.trim();
    let (addr, prefix) = match text.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (text, None),
    };

    let ip: Ipv4Addr = addr
        .parse()
        .map_err(|e: std::net::AddrParseError| invalid_ip(field, raw, &e.to_string()))?;
    let prefix = match prefix {
        None => 32,
        Some(mask) if mask.contains('.') => {
            let mask: Ipv4Addr = mask
                .parse()
                .map_err(|e: std::net::AddrParseError| invalid_ip(field, raw, &e.to_string()))?;
            ipv4_mask_to_prefix(mask).map_err(|e| invalid_ip(field, raw, &e.to_string()))?
        }
        Some(len) => len
            .parse::<u8>()
            .map_err(|_| invalid_ip(field, raw, "invalid prefix length"))?,
    };

    Ipv4Network::new(ip, prefix).map_err(|e| invalid_ip(field, raw, &e.to_string()))
}

fn optional_vlan(field: &str, raw: &str) -> Result<Option<VlanId>, ValidationError> {
    let token = raw.trim();
    if token.is_empty() {
        return Ok(None);
    }
    VlanId::parse(field, token).map(Some)
}

fn malformed(field: &str, value: &str) -> ValidationError {
    ValidationError::MalformedSwitchportDescriptor {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn invalid_ip(field: &str, value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidIpInterface {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
