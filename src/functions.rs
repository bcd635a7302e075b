//! Builders for CloudFormation intrinsic function constructs

use serde_json::{json, Value as JsonValue};

/// `{"Ref": name}`
pub fn reference(name: &str) -> JsonValue {
    json!({ "Ref": name })
}

/// `{"Fn::GetAtt": [resource, attribute]}`
pub fn get_att(resource: &str, attribute: &str) -> JsonValue {
    json!({ "Fn::GetAtt": [resource, attribute] })
}

/// `{"Fn::Join": [glue, [items...]]}`
pub fn join(glue: &str, items: Vec<JsonValue>) -> JsonValue {
    json!({ "Fn::Join": [glue, items] })
}

/// `{"Fn::Base64": value}`
pub fn base64(value: JsonValue) -> JsonValue {
    json!({ "Fn::Base64": value })
}
