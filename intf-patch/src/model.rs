use clap::ValueEnum;
use intf_model::{
    FieldAliases, FromTicket, InterfaceRecord, RawTicket, SwitchportRecord, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::{interface_patch, switchport_patch};

/// Which record a ticket is validated into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Base interface: name, enabled, description, MTU.
    Interface,
    /// Interface plus switchport mode, VLANs and IPv4 address.
    Switchport,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Interface => "interface",
            ModelKind::Switchport => "switchport",
        }
    }

    /// Validate a webhook ticket using the ticket-side field names.
    pub fn validate(self, ticket: &RawTicket) -> Result<Validated, ValidationError> {
        let aliases = FieldAliases::ticket();
        match self {
            ModelKind::Interface => {
                InterfaceRecord::from_ticket(ticket, &aliases).map(Validated::Interface)
            }
            ModelKind::Switchport => {
                SwitchportRecord::from_ticket(ticket, &aliases).map(Validated::Switchport)
            }
        }
    }
}

/// A record produced by either model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    Interface(InterfaceRecord),
    Switchport(SwitchportRecord),
}

impl Validated {
    pub fn interface(&self) -> &InterfaceRecord {
        match self {
            Validated::Interface(record) => record,
            Validated::Switchport(record) => record.interface(),
        }
    }

    /// Normalized record as JSON.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        match self {
            Validated::Interface(record) => serde_json::to_value(record),
            Validated::Switchport(record) => serde_json::to_value(record),
        }
    }

    /// YANG Patch message-body for the record.
    pub fn patch(&self) -> Value {
        match self {
            Validated::Interface(record) => interface_patch(record),
            Validated::Switchport(record) => switchport_patch(record),
        }
    }
}
