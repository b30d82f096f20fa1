use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;

/// Interface index grammar from the device YANG model.
///
/// Matches `1/0/3`, `25.2`, `1/0/3.100`, `0`.
static INDEX_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)(/(0|[1-9][0-9]*))*(\.[0-9]+)?$")
        .expect("interface index grammar is a valid regex")
});

/// Raw split of an interface name, before the index is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    /// Leading non-digit run, e.g. `GigabitEthernet`.
    pub class: String,
    /// Everything after the class, e.g. `1/0/3`.
    pub index: String,
}

/// Split a raw interface name into class and index.
///
/// The class is the longest leading run of non-digit characters and the index
/// is the remainder, which may be empty or non-numeric at this point. Fails
/// only when the name is empty or starts with a digit.
pub fn parse_interface_name(field: &str, raw: &str) -> Result<NameParts, ValidationError> {
    let name = raw.trim();
    let split = name.find(|c: char| c.is_ascii_digit()).unwrap_or(name.len());
    if split == 0 {
        return Err(ValidationError::MalformedInterfaceName {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }

    let (class, index) = name.split_at(split);
    Ok(NameParts {
        class: class.to_string(),
        index: index.to_string(),
    })
}

/// Interface index that conforms to the YANG naming grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InterfaceIndex(String);

impl InterfaceIndex {
    /// Check `value` against the grammar.
    pub fn new(field: &str, value: &str) -> Result<Self, ValidationError> {
        if !is_valid_index(value) {
            return Err(ValidationError::InvalidInterfaceIndex {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for InterfaceIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InterfaceIndex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// True when `value` matches the interface index grammar.
pub fn is_valid_index(value: &str) -> bool {
    INDEX_GRAMMAR.is_match(value)
}
