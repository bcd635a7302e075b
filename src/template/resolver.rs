//! Value resolution - rewrites model values into plain JSON wire values

use serde_json::{Map, Value as JsonValue};
use tracing::trace;

use crate::error::ModelError;
use crate::model::Value;
use crate::reference::interpolate;

/// Resolve a value into plain JSON
///
/// - lists and maps are resolved element-wise, order and keys preserved
/// - strings are scanned for reference markers
/// - resources and parameters become `Ref`, attributes `Fn::GetAtt`
/// - properties become their slot's projected value
/// - scalars pass through
///
/// Only model handles and marker syntax trigger rewriting; plain maps such as
/// `{"Ref": "x"}` are copied as they are, so resolving a resolved tree is a
/// no-op.
pub fn resolve(value: &Value) -> Result<JsonValue, ModelError> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => Ok(JsonValue::Number(n.clone())),
        Value::String(s) => Ok(interpolate(s)),
        Value::List(items) => items
            .iter()
            .map(resolve)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Value::Map(entries) => {
            let mut resolved = Map::new();
            for (key, value) in entries {
                resolved.insert(key.clone(), resolve(value)?);
            }
            Ok(JsonValue::Object(resolved))
        }
        Value::Resource(r) => {
            let reference = r.reference()?;
            trace!(%reference, "resolved resource");
            Ok(reference.to_wire())
        }
        Value::Attribute(a) => {
            let reference = a.reference()?;
            trace!(%reference, "resolved attribute");
            Ok(reference.to_wire())
        }
        Value::Parameter(p) => Ok(p.reference()?.to_wire()),
        Value::Property(p) => p.project(),
    }
}

/// Resolve markers inside an already-plain JSON tree
///
/// Equivalent to converting the tree into a [`Value`] and resolving it, but
/// infallible: plain JSON holds no handles that could be unnamed.
pub fn resolve_json(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::String(s) => interpolate(s),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(resolve_json).collect()),
        JsonValue::Object(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), resolve_json(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{pseudo, Parameter, Resource, ResourceKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attributed(name: Option<&str>) -> Resource {
        let r = Resource::new(ResourceKind::new("ResourceWithAttributes").attribute("attr1"));
        if let Some(name) = name {
            r.set_name(name);
        }
        r
    }

    #[test]
    fn test_scalars_unchanged() {
        assert_eq!(resolve(&Value::from(1)).unwrap(), json!(1));
        assert_eq!(resolve(&Value::from(true)).unwrap(), json!(true));
        assert_eq!(resolve(&Value::Null).unwrap(), json!(null));
        assert_eq!(resolve(&Value::from("plain")).unwrap(), json!("plain"));
    }

    #[test]
    fn test_attribute_in_list() {
        let r1 = attributed(Some("r1"));
        let value = Value::from(vec![Value::from(r1.attribute("attr1").unwrap())]);
        assert_eq!(
            resolve(&value).unwrap(),
            json!([{"Fn::GetAtt": ["r1", "attr1"]}])
        );
    }

    #[test]
    fn test_attribute_in_map() {
        let r1 = attributed(Some("r1"));
        let value = Value::map([("key", r1.attribute("attr1").unwrap())]);
        assert_eq!(
            resolve(&value).unwrap(),
            json!({"key": {"Fn::GetAtt": ["r1", "attr1"]}})
        );
    }

    #[test]
    fn test_unnamed_attribute_is_an_error() {
        let r1 = attributed(None);
        let value = Value::from(r1.attribute("attr1").unwrap());
        assert!(matches!(
            resolve(&value),
            Err(ModelError::UnnamedReference { .. })
        ));
    }

    #[test]
    fn test_nested_unnamed_resource_is_an_error() {
        let value = Value::map([("deep", vec![Value::from(attributed(None))])]);
        assert!(resolve(&value).is_err());
    }

    #[test]
    fn test_parameter_refs() {
        let p = Parameter::named("KeyName");
        assert_eq!(resolve(&Value::from(&p)).unwrap(), json!({"Ref": "KeyName"}));
        assert_eq!(
            resolve(&Value::from(pseudo::region())).unwrap(),
            json!({"Ref": "AWS::Region"})
        );
    }

    #[test]
    fn test_marker_string_resolved() {
        let r1 = attributed(Some("r1"));
        let text = format!("test{}", r1.attribute("attr1").unwrap().reference().unwrap());
        assert_eq!(
            resolve(&Value::from(text)).unwrap(),
            json!({"Fn::Join": ["", ["test", {"Fn::GetAtt": ["r1", "attr1"]}]]})
        );
    }

    #[test]
    fn test_property_value_projected() {
        let r = Resource::named(ResourceKind::new("Foo").property("p"), "foo");
        r.set("p", vec!["a", "b"]).unwrap();
        let value = Value::from(r.property("p").unwrap());
        assert_eq!(resolve(&value).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolved = json!({
            "a": {"Ref": "r1"},
            "b": {"Fn::GetAtt": ["r1", "attr1"]},
            "c": {"Fn::Join": ["", ["x", {"Ref": "r2"}, "{y}"]]},
            "d": [1, 2.5, null, true, "text"]
        });
        assert_eq!(resolve(&Value::from(resolved.clone())).unwrap(), resolved);
        assert_eq!(resolve_json(&resolved), resolved);

        let once = resolve_json(&json!(["{Resource|r1}", "a{Parameter|p}"]));
        assert_eq!(resolve_json(&once), once);
    }
}
