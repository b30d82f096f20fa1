//! VLAN id range rule and trunk allowed-VLAN lists.

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// Lowest usable VLAN id.
pub const VLAN_MIN: u16 = 1;
/// Highest usable VLAN id (inclusive), per IEEE 802.1Q.
pub const VLAN_MAX: u16 = 4094;

/// A VLAN id in the range 1-4094.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VlanId(u16);

impl VlanId {
    /// Wrap a numeric id, rejecting anything outside 1-4094.
    pub fn new(field: &str, id: u16) -> Result<Self, ValidationError> {
        if !(VLAN_MIN..=VLAN_MAX).contains(&id) {
            return Err(out_of_range(field, &id.to_string()));
        }
        Ok(Self(id))
    }

    /// Parse an unsigned decimal token. Signed or non-numeric tokens are
    /// reported as out of range.
    pub fn parse(field: &str, token: &str) -> Result<Self, ValidationError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(out_of_range(field, token));
        }
        let id = token
            .parse::<u16>()
            .map_err(|_| out_of_range(field, token))?;
        Self::new(field, id)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Display for VlanId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> u16 {
        vlan.0
    }
}

/// Allowed-VLAN list for a trunk port, e.g. `10,20-30`.
///
/// The list keeps its normalized text: whitespace removed and every id written
/// back in plain decimal, so ` 010, 20` becomes `10,20`. `,` and `-` are both
/// treated as element delimiters, so `20-30` checks the endpoints 20 and 30
/// and not the ids in between. An empty list is legal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedVlans {
    list: String,
    endpoints: Vec<VlanId>,
}

impl AllowedVlans {
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(Self::default());
        }

        let mut list = String::with_capacity(compact.len());
        let mut endpoints = Vec::new();
        for element in compact.split_inclusive([',', '-']) {
            let (token, delimiter) = match element.strip_suffix([',', '-']) {
                Some(token) => (token, &element[token.len()..]),
                None => (element, ""),
            };
            let id = VlanId::parse(field, token)?;
            list.push_str(&id.to_string());
            list.push_str(delimiter);
            endpoints.push(id);
        }
        // A trailing delimiter leaves an empty final element.
        if compact.ends_with([',', '-']) {
            return Err(out_of_range(field, ""));
        }

        Ok(Self { list, endpoints })
    }

    pub fn as_str(&self) -> &str {
        &self.list
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Every id that was range-checked, in list order.
    pub fn endpoints(&self) -> &[VlanId] {
        &self.endpoints
    }
}

impl Display for AllowedVlans {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list)
    }
}

impl Serialize for AllowedVlans {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.list)
    }
}

fn out_of_range(field: &str, value: &str) -> ValidationError {
    ValidationError::VlanOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    }
}
