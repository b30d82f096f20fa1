use serde::Serialize;

use crate::error::ValidationError;
use crate::name::{parse_interface_name, InterfaceIndex, NameParts};
use crate::ticket::{coerce_bool, coerce_int, describe, is_unset, optional_str};
use crate::ticket::{FieldAliases, FromTicket, RawTicket};

/// MTU applied when the ticket leaves the field blank.
pub const DEFAULT_MTU: u16 = 1500;
pub const MIN_MTU: u16 = 1500;
pub const MAX_MTU: u16 = 9000;
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Validated generic interface settings.
///
/// Built only through [`InterfaceRecord::from_ticket`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    interface_class: String,
    interface_index: InterfaceIndex,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    mtu: u16,
}

/// Coerced non-name fields, the middle stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BaseFields {
    enabled: bool,
    description: Option<String>,
    mtu: u16,
}

impl InterfaceRecord {
    pub fn interface_class(&self) -> &str {
        &self.interface_class
    }

    pub fn interface_index(&self) -> &InterfaceIndex {
        &self.interface_index
    }

    /// Full device name, e.g. `GigabitEthernet1/0/3`.
    pub fn interface_name(&self) -> String {
        format!("{}{}", self.interface_class, self.interface_index)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn mtu(&self) -> u16 {
        self.mtu
    }

    /// Emit the record as a ticket keyed by [`FieldAliases::normalized`].
    pub fn to_normalized_ticket(&self) -> RawTicket {
        let aliases = FieldAliases::normalized();
        let ticket = RawTicket::default()
            .with(aliases.name, self.interface_name())
            .with(aliases.enabled, self.enabled)
            .with(aliases.mtu, self.mtu);
        match &self.description {
            Some(description) => ticket.with(aliases.description, description.as_str()),
            None => ticket,
        }
    }
}

impl FromTicket for InterfaceRecord {
    fn from_ticket(ticket: &RawTicket, aliases: &FieldAliases) -> Result<Self, ValidationError> {
        let parts = extract_name(ticket, aliases)?;
        let fields = BaseFields::from_ticket(ticket, aliases)?;
        let interface_index = InterfaceIndex::new(aliases.name, &parts.index)?;

        Ok(Self {
            interface_class: parts.class,
            interface_index,
            enabled: fields.enabled,
            description: fields.description,
            mtu: fields.mtu,
        })
    }
}

impl BaseFields {
    fn from_ticket(ticket: &RawTicket, aliases: &FieldAliases) -> Result<Self, ValidationError> {
        let enabled = match ticket.get(aliases.enabled) {
            Some(value) => coerce_bool(aliases.enabled, value)?,
            None => {
                return Err(ValidationError::MissingRequiredField {
                    field: aliases.enabled.to_string(),
                })
            }
        };

        let description = match optional_str(aliases.description, ticket.get(aliases.description))? {
            Some(text) => {
                let length = text.chars().count();
                if length > MAX_DESCRIPTION_LEN {
                    return Err(ValidationError::FieldTooLong {
                        field: aliases.description.to_string(),
                        length,
                        max: MAX_DESCRIPTION_LEN,
                    });
                }
                Some(text.to_string())
            }
            None => None,
        };

        let mtu = match ticket.get(aliases.mtu) {
            raw if is_unset(raw) => DEFAULT_MTU,
            Some(value) => coerce_int(aliases.mtu, value, MIN_MTU, MAX_MTU)?,
            None => DEFAULT_MTU,
        };

        Ok(Self {
            enabled,
            description,
            mtu,
        })
    }
}

fn extract_name(ticket: &RawTicket, aliases: &FieldAliases) -> Result<NameParts, ValidationError> {
    match ticket.get(aliases.name) {
        Some(serde_json::Value::String(raw)) => parse_interface_name(aliases.name, raw),
        other => Err(ValidationError::MalformedInterfaceName {
            field: aliases.name.to_string(),
            value: other.map(describe).unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{InterfaceRecord, DEFAULT_MTU};
    use crate::{FieldAliases, FromTicket, RawTicket, ValidationError};

    fn ticket() -> RawTicket {
        RawTicket::default()
            .with("network_interface_name", "GigabitEthernet1/0/3")
            .with("network_interface_enabled", true)
            .with("network_interface_description", "Uplink to MCO1-1N-P23A")
            .with("network_interface_mtu", "")
    }

    fn validate(ticket: &RawTicket) -> Result<InterfaceRecord, ValidationError> {
        InterfaceRecord::from_ticket(ticket, &FieldAliases::ticket())
    }

    #[test]
    fn missing_name_is_malformed() {
        let mut map = ticket().as_map().clone();
        map.remove("network_interface_name");
        let err = validate(&RawTicket::from(map)).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedInterfaceName { .. }));
    }

    #[test]
    fn non_string_name_is_malformed() {
        let err = validate(&ticket().with("network_interface_name", 42)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedInterfaceName {
                field: "network_interface_name".to_string(),
                value: "42".to_string(),
            }
        );
    }

    #[test]
    fn name_errors_win_over_later_steps() {
        let ticket = ticket()
            .with("network_interface_name", "")
            .with("network_interface_mtu", "1");
        let err = validate(&ticket).unwrap_err();
        assert_eq!(err.kind(), "malformed_interface_name");
    }

    #[test]
    fn field_errors_come_before_index_grammar() {
        let ticket = ticket()
            .with("network_interface_name", "GigabitEthernet1//3")
            .with("network_interface_mtu", "100");
        assert_eq!(validate(&ticket).unwrap_err().kind(), "field_out_of_range");
    }

    #[test]
    fn null_mtu_takes_default() {
        let record = validate(&ticket().with("network_interface_mtu", json!(null))).expect("valid");
        assert_eq!(record.mtu(), DEFAULT_MTU);
    }

    #[test]
    fn enabled_accepts_string_forms() {
        let record = validate(&ticket().with("network_interface_enabled", "false")).expect("valid");
        assert!(!record.enabled());
    }

    #[test]
    fn enabled_rejects_garbage() {
        let err = validate(&ticket().with("network_interface_enabled", "sometimes")).unwrap_err();
        assert_eq!(err.kind(), "invalid_field_type");
        assert_eq!(err.field(), Some("network_interface_enabled"));
    }

    #[test]
    fn description_must_be_text() {
        let err = validate(&ticket().with("network_interface_description", json!([1]))).unwrap_err();
        assert_eq!(err.kind(), "invalid_field_type");
    }

    #[test]
    fn description_limit_counts_characters() {
        let ticket = ticket().with("network_interface_description", "é".repeat(200));
        let record = validate(&ticket).expect("200 characters is allowed");
        assert_eq!(record.description().map(|d| d.chars().count()), Some(200));
    }

    #[test]
    fn serialized_record_omits_absent_description() {
        let record = validate(&ticket().with("network_interface_description", "")).expect("valid");
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(
            json,
            json!({
                "interface_class": "GigabitEthernet",
                "interface_index": "1/0/3",
                "enabled": true,
                "mtu": 1500
            })
        );
    }
}
