//! Raw ticket input, the field alias table and JSON value coercion.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Key under which ITSM webhooks nest the ticket fields.
pub const WEBHOOK_TICKET_KEY: &str = "ticket";

/// Raw ticket fields as received, keyed by ticket-side names.
///
/// Validation only ever borrows a ticket, so one ticket may be validated
/// many times or from several threads.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RawTicket(Map<String, Value>);

impl RawTicket {
    /// Wrap a bare ticket object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::TicketNotObject {
                value: describe(&other),
            }),
        }
    }

    /// Accept either a webhook envelope `{"ticket": {...}}` or a bare ticket.
    pub fn from_webhook(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(mut map) => match map.remove(WEBHOOK_TICKET_KEY) {
                Some(inner) => Self::from_value(inner),
                None => Ok(Self(map)),
            },
            other => Self::from_value(other),
        }
    }

    /// Builder-style field setter for assembling tickets in code.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RawTicket {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Mapping from record concerns to the raw field names that carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    pub name: &'static str,
    pub enabled: &'static str,
    pub description: &'static str,
    pub mtu: &'static str,
    pub switchport: &'static str,
    pub ip4_address: &'static str,
}

impl FieldAliases {
    /// Field names used by ITSM webhook tickets.
    pub const fn ticket() -> Self {
        Self {
            name: "network_interface_name",
            enabled: "network_interface_enabled",
            description: "network_interface_description",
            mtu: "network_interface_mtu",
            switchport: "network_switchport_mode_and_vlan",
            ip4_address: "network_interface_ip4_address",
        }
    }

    /// Field names of a normalized record, used to re-validate record output.
    pub const fn normalized() -> Self {
        Self {
            name: "interface_name",
            enabled: "enabled",
            description: "description",
            mtu: "mtu",
            switchport: "switchport_mode_and_vlan",
            ip4_address: "ip4_address",
        }
    }
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self::ticket()
    }
}

/// Records that can be validated out of a raw ticket.
pub trait FromTicket: Sized {
    fn from_ticket(ticket: &RawTicket, aliases: &FieldAliases) -> Result<Self, ValidationError>;
}

/// Validate each ticket independently. A failure never affects its siblings.
pub fn validate_batch<'a, T, I>(tickets: I, aliases: &FieldAliases) -> Vec<Result<T, ValidationError>>
where
    T: FromTicket,
    I: IntoIterator<Item = &'a RawTicket>,
{
    tickets
        .into_iter()
        .map(|ticket| T::from_ticket(ticket, aliases))
        .collect()
}

/// Render a raw value for error messages: strings verbatim, everything else as JSON.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Absent, `null` and `""` all mean "not set" for optional ticket fields.
pub(crate) fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

pub(crate) fn optional_str<'a>(
    field: &str,
    value: Option<&'a Value>,
) -> Result<Option<&'a str>, ValidationError> {
    if is_unset(value) {
        return Ok(None);
    }
    match value {
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(invalid_type(field, "a string", other)),
        None => Ok(None),
    }
}

pub(crate) fn coerce_bool(field: &str, value: &Value) -> Result<bool, ValidationError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| invalid_type(field, "a boolean", value))
}

pub(crate) fn coerce_int<T>(field: &str, value: &Value, min: T, max: T) -> Result<T, ValidationError>
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .filter(|n| (min.into()..=max.into()).contains(n))
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| ValidationError::FieldOutOfRange {
            field: field.to_string(),
            value: describe(value),
            min: min.into(),
            max: max.into(),
        })
}

fn invalid_type(field: &str, expected: &'static str, value: &Value) -> ValidationError {
    ValidationError::InvalidFieldType {
        field: field.to_string(),
        expected,
        value: describe(value),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{coerce_bool, coerce_int, is_unset, optional_str, FieldAliases, RawTicket};
    use crate::ValidationError;

    #[test]
    fn webhook_envelope_is_unwrapped() {
        let ticket = RawTicket::from_webhook(json!({
            "ticket": { "network_interface_name": "Loopback0" }
        }))
        .expect("object");
        assert_eq!(
            ticket.get(FieldAliases::ticket().name),
            Some(&json!("Loopback0"))
        );

        let bare = RawTicket::from_webhook(json!({ "network_interface_name": "Loopback0" }))
            .expect("object");
        assert_eq!(bare, ticket);
    }

    #[test]
    fn non_object_ticket_is_rejected() {
        let err = RawTicket::from_webhook(json!(["not", "a", "ticket"])).unwrap_err();
        assert!(matches!(err, ValidationError::TicketNotObject { .. }));
        let err = RawTicket::from_webhook(json!({ "ticket": 5 })).unwrap_err();
        assert!(matches!(err, ValidationError::TicketNotObject { .. }));
    }

    #[test]
    fn bool_coercion_accepts_lax_forms() {
        for raw in [json!(true), json!(1), json!("yes"), json!("On"), json!("TRUE")] {
            assert!(coerce_bool("f", &raw).expect("coercible"));
        }
        for raw in [json!(false), json!(0), json!("no"), json!("off"), json!("0")] {
            assert!(!coerce_bool("f", &raw).expect("coercible"));
        }
        for raw in [json!(null), json!(2), json!("maybe"), json!([])] {
            assert!(coerce_bool("f", &raw).is_err());
        }
    }

    #[test]
    fn int_coercion_reports_range() {
        assert_eq!(coerce_int("mtu", &json!(" 9000 "), 1500u16, 9000).expect("valid"), 9000);
        assert_eq!(coerce_int("mtu", &json!(1500), 1500u16, 9000).expect("valid"), 1500);
        let err = coerce_int("mtu", &json!("jumbo"), 1500u16, 9000).unwrap_err();
        assert!(matches!(err, ValidationError::FieldOutOfRange { .. }));
        assert!(coerce_int("mtu", &json!(1500.5), 1500u16, 9000).is_err());
    }

    #[test]
    fn int_coercion_rejects_values_beyond_the_target_type() {
        let err = coerce_int("mtu", &json!(70000), 1500u16, 9000).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldOutOfRange {
                field: "mtu".to_string(),
                value: "70000".to_string(),
                min: 1500,
                max: 9000,
            }
        );
    }

    #[test]
    fn unset_covers_absent_null_and_empty() {
        assert!(is_unset(None));
        assert!(is_unset(Some(&json!(null))));
        assert!(is_unset(Some(&json!(""))));
        assert!(!is_unset(Some(&json!(" "))));
        assert_eq!(optional_str("d", Some(&json!(""))).expect("ok"), None);
        assert!(optional_str("d", Some(&json!(12))).is_err());
    }
}
