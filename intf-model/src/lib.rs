//! Validation and normalization of interface-change tickets.
//!
//! A ticket arrives from an ITSM webhook as a loosely typed JSON object. This
//! crate turns it into an immutable, fully typed record that a renderer can
//! turn into a RESTCONF payload:
//!
//! - [`name`] — split `GigabitEthernet1/0/3` into class and index, check the
//!   index against the YANG naming grammar
//! - [`vlan`] — VLAN id range rule and the trunk allowed-VLAN list
//! - [`ticket`] — raw ticket wrapper, the field alias table and value coercion
//! - [`interface`] — base record: enabled flag, description, MTU
//! - [`switchport`] — access/trunk/layer-3 variants and the IPv4 interface
//!
//! Validation performs no I/O and never logs. Every failure is a
//! [`ValidationError`] naming the offending field and value.

pub mod error;
pub mod interface;
pub mod name;
pub mod switchport;
pub mod ticket;
pub mod vlan;

pub use error::ValidationError;
pub use interface::{InterfaceRecord, DEFAULT_MTU, MAX_DESCRIPTION_LEN, MAX_MTU, MIN_MTU};
pub use name::{parse_interface_name, InterfaceIndex, NameParts};
pub use switchport::{SwitchportConfig, SwitchportMode, SwitchportRecord};
pub use ticket::{validate_batch, FieldAliases, FromTicket, RawTicket};
pub use vlan::{AllowedVlans, VlanId, VLAN_MAX, VLAN_MIN};
