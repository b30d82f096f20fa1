//! YANG Patch (RFC 8072) message-bodies for validated interface records.
//!
//! The body carries one `merge` edit against the IOS-XE native interface
//! list. Optional record fields are left out of the body rather than sent as
//! empty values, so a blank description never clears one on the device.

use intf_model::{InterfaceRecord, SwitchportConfig, SwitchportRecord};
use serde_json::{json, Map, Value};

pub const NATIVE_MODULE: &str = "Cisco-IOS-XE-native";
pub const SWITCH_MODULE: &str = "Cisco-IOS-XE-switch";
pub const YANG_PATCH_KEY: &str = "ietf-yang-patch:yang-patch";

/// Message-body for a base interface record.
pub fn interface_patch(record: &InterfaceRecord) -> Value {
    yang_patch(record, interface_body(record))
}

/// Message-body for a switchport record, including VLAN and IPv4 settings.
pub fn switchport_patch(record: &SwitchportRecord) -> Value {
    let mut body = interface_body(record.interface());

    match record.switchport() {
        SwitchportConfig::Layer3 => {
            body.insert("switchport-conf".into(), json!({ "switchport": false }));
        }
        config => {
            body.insert(
                "switchport-config".into(),
                json!({ "switchport": switchport_body(config) }),
            );
        }
    }

    if let Some(net) = record.ip4_address() {
        body.insert(
            "ip".into(),
            json!({
                "address": {
                    "primary": {
                        "address": net.ip().to_string(),
                        "mask": net.mask().to_string()
                    }
                }
            }),
        );
    }

    yang_patch(record.interface(), body)
}

/// RESTCONF target path of the interface list entry, key percent-encoded.
pub fn edit_target(record: &InterfaceRecord) -> String {
    format!(
        "/interface/{}={}",
        record.interface_class(),
        record.interface_index().as_str().replace('/', "%2F")
    )
}

fn yang_patch(record: &InterfaceRecord, body: Map<String, Value>) -> Value {
    let id = format!("interface-{}", record.interface_name());

    let mut value = Map::new();
    value.insert(
        format!("{NATIVE_MODULE}:{}", record.interface_class()),
        Value::Array(vec![Value::Object(body)]),
    );

    let mut root = Map::new();
    root.insert(
        YANG_PATCH_KEY.to_string(),
        json!({
            "patch-id": id,
            "edit": [{
                "edit-id": id,
                "operation": "merge",
                "target": edit_target(record),
                "value": value
            }]
        }),
    );
    Value::Object(root)
}

fn interface_body(record: &InterfaceRecord) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("name".into(), json!(record.interface_index().as_str()));
    if let Some(description) = record.description() {
        body.insert("description".into(), json!(description));
    }
    body.insert("mtu".into(), json!(record.mtu()));
    if !record.enabled() {
        body.insert("shutdown".into(), json!([null]));
    }
    body
}

fn switchport_body(config: &SwitchportConfig) -> Value {
    let mut switchport = Map::new();
    match config {
        SwitchportConfig::Access { native_vlan } => {
            switchport.insert(format!("{SWITCH_MODULE}:mode"), json!({ "access": {} }));
            if let Some(vlan) = native_vlan {
                switchport.insert(
                    format!("{SWITCH_MODULE}:access"),
                    json!({ "vlan": { "vlan": vlan.get() } }),
                );
            }
        }
        SwitchportConfig::Trunk {
            native_vlan,
            allowed_vlans,
        } => {
            switchport.insert(format!("{SWITCH_MODULE}:mode"), json!({ "trunk": {} }));
            let mut trunk = Map::new();
            if let Some(vlan) = native_vlan {
                trunk.insert("native".into(), json!({ "vlan": { "vlan-id": vlan.get() } }));
            }
            if !allowed_vlans.is_empty() {
                trunk.insert(
                    "allowed".into(),
                    json!({ "vlan": { "vlans": allowed_vlans.as_str() } }),
                );
            }
            if !trunk.is_empty() {
                switchport.insert(format!("{SWITCH_MODULE}:trunk"), Value::Object(trunk));
            }
        }
        SwitchportConfig::Layer3 => {}
    }
    Value::Object(switchport)
}
