use serde::Serialize;
use thiserror::Error;

/// Errors returned when a ticket cannot be turned into a record.
///
/// Every variant carries the raw (ticket-side) field name so callers can point
/// the ticket author at the exact input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The ticket payload was not a JSON object.
    #[error("ticket must be a JSON object, got {value}")]
    TicketNotObject { value: String },
    /// The raw name could not be split into class and index.
    #[error("{field}: unable to extract the interface class and index from {value:?}")]
    MalformedInterfaceName { field: String, value: String },
    /// The index part of the name does not match the YANG naming grammar.
    #[error("{field}: name does not conform to interface-index grammar: '{value}'")]
    InvalidInterfaceIndex { field: String, value: String },
    /// A required field was absent from the ticket.
    #[error("{field}: required field is missing")]
    MissingRequiredField { field: String },
    /// A field held a JSON value of the wrong shape.
    #[error("{field}: expected {expected}, got {value}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        value: String,
    },
    /// A string field exceeded its maximum length.
    #[error("{field}: length {length} exceeds maximum of {max} characters")]
    FieldTooLong {
        field: String,
        length: usize,
        max: usize,
    },
    /// A numeric field was non-numeric or outside its bounds.
    #[error("{field}: value {value} must be an integer in the range {min}-{max}")]
    FieldOutOfRange {
        field: String,
        value: String,
        min: i64,
        max: i64,
    },
    /// The switchport descriptor was missing or had no `mode:rest` shape.
    #[error("{field}: malformed switchport descriptor {value:?}")]
    MalformedSwitchportDescriptor { field: String, value: String },
    /// The descriptor mode was not one of access, trunk, l3.
    #[error("{field}: unknown switchport mode '{value}' (expected access, trunk or l3)")]
    InvalidSwitchportMode { field: String, value: String },
    /// A native or allowed VLAN id was non-numeric or outside 1-4094.
    #[error("{field}: VLAN '{value}' error: must be in the range 1-4094")]
    VlanOutOfRange { field: String, value: String },
    /// The IPv4 interface could not be parsed as address and prefix length.
    #[error("{field}: invalid IPv4 interface '{value}': {reason}")]
    InvalidIpInterface {
        field: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// Stable snake_case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TicketNotObject { .. } => "ticket_not_object",
            Self::MalformedInterfaceName { .. } => "malformed_interface_name",
            Self::InvalidInterfaceIndex { .. } => "invalid_interface_index",
            Self::MissingRequiredField { .. } => "missing_required_field",
            Self::InvalidFieldType { .. } => "invalid_field_type",
            Self::FieldTooLong { .. } => "field_too_long",
            Self::FieldOutOfRange { .. } => "field_out_of_range",
            Self::MalformedSwitchportDescriptor { .. } => "malformed_switchport_descriptor",
            Self::InvalidSwitchportMode { .. } => "invalid_switchport_mode",
            Self::VlanOutOfRange { .. } => "vlan_out_of_range",
            Self::InvalidIpInterface { .. } => "invalid_ip_interface",
        }
    }

    /// Raw field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::TicketNotObject { .. } => None,
            Self::MalformedInterfaceName { field, .. }
            | Self::InvalidInterfaceIndex { field, .. }
            | Self::MissingRequiredField { field }
            | Self::InvalidFieldType { field, .. }
            | Self::FieldTooLong { field, .. }
            | Self::FieldOutOfRange { field, .. }
            | Self::MalformedSwitchportDescriptor { field, .. }
            | Self::InvalidSwitchportMode { field, .. }
            | Self::VlanOutOfRange { field, .. }
            | Self::InvalidIpInterface { field, .. } => Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn serializes_with_kind_tag() {
        let err = ValidationError::VlanOutOfRange {
            field: "network_switchport_mode_and_vlan".to_string(),
            value: "4095".to_string(),
        };
        let json = serde_json::to_value(&err).expect("serialize");
        assert_eq!(json["kind"], err.kind());
        assert_eq!(json["value"], "4095");
        assert_eq!(err.field(), Some("network_switchport_mode_and_vlan"));
    }

    #[test]
    fn index_error_message_includes_value() {
        let err = ValidationError::InvalidInterfaceIndex {
            field: "network_interface_name".to_string(),
            value: "1//3".to_string(),
        };
        assert!(err.to_string().contains("'1//3'"));
    }
}
