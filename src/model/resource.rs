//! Resources and their property/attribute slots

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value as JsonValue};

use super::kind::{FieldSpec, ResourceKind, SlotKind};
use super::value::Value;
use crate::error::ModelError;
use crate::reference::Reference;
use crate::template::resolver::resolve;

/// A typed infrastructure component
///
/// `Resource` is a shared handle: clones point at the same entity, so a
/// resource stored as another resource's property value observes names and
/// field writes made later through any other handle.
#[derive(Clone)]
pub struct Resource {
    inner: Rc<ResourceInner>,
}

struct ResourceInner {
    kind: ResourceKind,
    name: RefCell<Option<String>>,
    /// One slot per field of `kind`, same order
    slots: RefCell<Vec<Value>>,
}

impl Resource {
    /// Create an unnamed resource with every slot set to its field default
    pub fn new(kind: ResourceKind) -> Self {
        let slots = kind
            .fields()
            .iter()
            .map(|f| f.default.clone().map_or(Value::Null, Value::from))
            .collect();
        Self {
            inner: Rc::new(ResourceInner {
                kind,
                name: RefCell::new(None),
                slots: RefCell::new(slots),
            }),
        }
    }

    /// Create a resource with an explicit name
    pub fn named(kind: ResourceKind, name: impl Into<String>) -> Self {
        let resource = Self::new(kind);
        resource.set_name(name);
        resource
    }

    /// Create a resource and fill fields from name/value pairs
    pub fn from_fields<K, V>(
        kind: ResourceKind,
        name: Option<&str>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, ModelError>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let resource = Self::new(kind);
        if let Some(name) = name {
            resource.set_name(name);
        }
        for (field, value) in fields {
            resource.set(field.as_ref(), value)?;
        }
        Ok(resource)
    }

    /// Set a field and hand the resource back, for chained construction
    pub fn with(self, field: &str, value: impl Into<Value>) -> Result<Self, ModelError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Write a value into the named property or attribute slot
    pub fn set(&self, field: &str, value: impl Into<Value>) -> Result<(), ModelError> {
        let index = self.slot_index(field)?;
        self.inner.slots.borrow_mut()[index] = value.into();
        Ok(())
    }

    /// Current value of the named slot
    pub fn get(&self, field: &str) -> Result<Value, ModelError> {
        let index = self.slot_index(field)?;
        Ok(self.slot_value(index))
    }

    /// Handle to a property slot
    pub fn property(&self, field: &str) -> Result<Property, ModelError> {
        let index = self.slot_of(field, SlotKind::Property)?;
        Ok(Property {
            resource: self.clone(),
            index,
        })
    }

    /// Handle to an attribute slot
    pub fn attribute(&self, field: &str) -> Result<Attribute, ModelError> {
        let index = self.slot_of(field, SlotKind::Attribute)?;
        Ok(Attribute {
            resource: self.clone(),
            index,
        })
    }

    /// Logical name, if one has been assigned
    pub fn name(&self) -> Option<String> {
        self.inner.name.borrow().clone().filter(|n| !n.is_empty())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.inner.name.borrow_mut() = Some(name.into());
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.inner.kind
    }

    pub fn type_name(&self) -> String {
        self.inner.kind.type_name()
    }

    /// Whether both handles point at the same resource
    pub fn ptr_eq(&self, other: &Resource) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Reference to this resource; requires a name
    pub fn reference(&self) -> Result<Reference, ModelError> {
        self.name().map(Reference::Resource).ok_or_else(|| {
            ModelError::unnamed(format!("resource of type '{}'", self.type_name()))
        })
    }

    /// Project into the resource's template entry
    ///
    /// Non-empty attributes land at the top level next to `Type`; non-empty
    /// properties are collected under `Properties`, which is left out when
    /// there are none.
    pub fn to_json(&self) -> Result<JsonValue, ModelError> {
        let slots = self.inner.slots.borrow().clone();
        let mut document = Map::new();
        let mut properties = Map::new();

        for (spec, value) in self.inner.kind.fields().iter().zip(&slots) {
            if value.is_empty() {
                continue;
            }
            match spec.slot {
                SlotKind::Property => {
                    properties.insert(spec.name.clone(), project(spec, value)?);
                }
                SlotKind::Attribute => {
                    document.insert(spec.name.clone(), resolve(value)?);
                }
            }
        }

        document.insert("Type".to_string(), JsonValue::String(self.type_name()));
        if !properties.is_empty() {
            document.insert("Properties".to_string(), JsonValue::Object(properties));
        }
        Ok(JsonValue::Object(document))
    }

    fn slot_index(&self, field: &str) -> Result<usize, ModelError> {
        self.inner
            .kind
            .field(field)
            .map(|(index, _)| index)
            .ok_or_else(|| ModelError::unknown_field(self.type_name(), field))
    }

    fn slot_of(&self, field: &str, slot: SlotKind) -> Result<usize, ModelError> {
        match self.inner.kind.field(field) {
            Some((index, spec)) if spec.slot == slot => Ok(index),
            _ => Err(ModelError::unknown_field(self.type_name(), field)),
        }
    }

    fn slot_value(&self, index: usize) -> Value {
        self.inner.slots.borrow()[index].clone()
    }

    fn spec(&self, index: usize) -> &FieldSpec {
        &self.inner.kind.fields()[index]
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may point back at this resource, so only identity is shown
        f.debug_struct("Resource")
            .field("type", &self.type_name())
            .field("name", &self.name())
            .finish()
    }
}

/// Property value in its output shape
///
/// Direct resource and attribute values are always emitted as references and
/// skip the field's projection; everything else is resolved first and then
/// projected.
fn project(spec: &FieldSpec, value: &Value) -> Result<JsonValue, ModelError> {
    match value {
        Value::Resource(r) => Ok(r.reference()?.to_wire()),
        Value::Attribute(a) => Ok(a.reference()?.to_wire()),
        other => {
            let resolved = resolve(other)?;
            Ok(match spec.projection {
                Some(projection) => projection(resolved),
                None => resolved,
            })
        }
    }
}

/// Handle to one property slot of a resource
#[derive(Clone)]
pub struct Property {
    resource: Resource,
    index: usize,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.resource.spec(self.index).name
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn get(&self) -> Value {
        self.resource.slot_value(self.index)
    }

    pub fn set(&self, value: impl Into<Value>) {
        self.resource.inner.slots.borrow_mut()[self.index] = value.into();
    }

    /// The slot's value as it appears in output; null when empty
    pub fn project(&self) -> Result<JsonValue, ModelError> {
        let value = self.get();
        if value.is_empty() {
            return Ok(JsonValue::Null);
        }
        project(self.resource.spec(self.index), &value)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("resource", &self.resource)
            .field("name", &self.name())
            .finish()
    }
}

/// Handle to one attribute slot of a resource
#[derive(Clone)]
pub struct Attribute {
    resource: Resource,
    index: usize,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.resource.spec(self.index).name
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn get(&self) -> Value {
        self.resource.slot_value(self.index)
    }

    pub fn set(&self, value: impl Into<Value>) {
        self.resource.inner.slots.borrow_mut()[self.index] = value.into();
    }

    /// Reference to this attribute; requires the owning resource to be named
    pub fn reference(&self) -> Result<Reference, ModelError> {
        match self.resource.name() {
            Some(resource) => Ok(Reference::attribute(resource, self.name())),
            None => Err(ModelError::unnamed(format!(
                "attribute '{}' of unnamed resource of type '{}'",
                self.name(),
                self.resource.type_name()
            ))),
        }
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("resource", &self.resource)
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn with_properties() -> ResourceKind {
        ResourceKind::new("ResourceWithProperties").property("prop1")
    }

    fn with_attributes() -> ResourceKind {
        ResourceKind::new("ResourceWithAttributes").attribute("attr1")
    }

    #[test]
    fn test_single_property_to_json() {
        let r = Resource::new(ResourceKind::new("Foo").property("p"))
            .with("p", 1)
            .unwrap();
        assert_eq!(r.to_json().unwrap(), json!({"Type": "Foo", "Properties": {"p": 1}}));
    }

    #[test]
    fn test_attribute_value_at_top_level() {
        let r = Resource::new(with_attributes()).with("attr1", "value").unwrap();
        assert_eq!(
            r.to_json().unwrap(),
            json!({"Type": "ResourceWithAttributes", "attr1": "value"})
        );
    }

    #[test]
    fn test_empty_properties_omitted() {
        let kind = ResourceKind::new("Foo")
            .property("a")
            .property("b")
            .property("c")
            .property("d")
            .property("e");
        let r = Resource::new(kind)
            .with("a", "")
            .and_then(|r| r.with("b", 0))
            .and_then(|r| r.with("c", Vec::<Value>::new()))
            .and_then(|r| r.with("d", "kept"))
            .unwrap();
        assert_eq!(
            r.to_json().unwrap(),
            json!({"Type": "Foo", "Properties": {"d": "kept"}})
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let r = Resource::new(with_properties());
        let err = r.set("nope", 1).unwrap_err();
        assert_eq!(
            err,
            ModelError::unknown_field("ResourceWithProperties", "nope")
        );
        assert!(Resource::from_fields(with_properties(), None, [("nope", 1)]).is_err());
    }

    #[test]
    fn test_property_assignment_overwrites() {
        let r = Resource::new(with_properties())
            .with("prop1", "old value")
            .unwrap();
        r.set("prop1", "new value").unwrap();
        assert_eq!(r.get("prop1").unwrap().as_str(), Some("new value"));
    }

    #[test]
    fn test_slot_handle_stays_bound() {
        let r = Resource::new(with_properties());
        let prop = r.property("prop1").unwrap();
        r.set("prop1", 7).unwrap();
        assert_eq!(prop.project().unwrap(), json!(7));
        prop.set("via handle");
        assert_eq!(r.get("prop1").unwrap().as_str(), Some("via handle"));
    }

    #[test]
    fn test_property_and_attribute_handles_check_slot_kind() {
        let r = Resource::new(with_properties());
        assert!(r.attribute("prop1").is_err());
        let r = Resource::new(with_attributes());
        assert!(r.property("attr1").is_err());
    }

    #[test]
    fn test_dependency_in_property_is_ref() {
        let r1 = Resource::named(with_properties(), "r1");
        let r2 = Resource::named(with_properties(), "r2").with("prop1", &r1).unwrap();
        assert_eq!(
            r2.to_json().unwrap(),
            json!({"Type": "ResourceWithProperties", "Properties": {"prop1": {"Ref": "r1"}}})
        );
    }

    #[test]
    fn test_attribute_reference_requires_name() {
        let r1 = Resource::new(with_attributes());
        let attr = r1.attribute("attr1").unwrap();
        assert!(matches!(
            attr.reference(),
            Err(ModelError::UnnamedReference { .. })
        ));
        r1.set_name("r1");
        assert_eq!(attr.reference().unwrap().to_string(), "{Attribute|r1|attr1}");
    }

    #[test]
    fn test_resource_marker() {
        let r1 = Resource::named(ResourceKind::new("Resource1"), "r1");
        assert_eq!(format!("{}", r1.reference().unwrap()), "{Resource|r1}");
        assert!(Resource::new(ResourceKind::new("Resource1")).reference().is_err());
    }

    #[test]
    fn test_empty_name_counts_as_unnamed() {
        let r = Resource::named(ResourceKind::new("Resource1"), "");
        assert_eq!(r.name(), None);
    }

    #[test]
    fn test_defaults_applied() {
        let kind = ResourceKind::new("ResourceWithDefaults").property_with_default("prop1", "default");
        let r = Resource::new(kind);
        assert_eq!(
            r.to_json().unwrap(),
            json!({"Type": "ResourceWithDefaults", "Properties": {"prop1": "default"}})
        );
    }

    #[test]
    fn test_custom_projection() {
        fn custom(value: JsonValue) -> JsonValue {
            json!({ "Custom": value })
        }
        let kind = ResourceKind::new("ResourceWithCustomProperty").projected_property("property", custom);
        let r = Resource::named(kind, "r").with("property", "value").unwrap();
        assert_eq!(
            r.to_json().unwrap(),
            json!({"Type": "ResourceWithCustomProperty", "Properties": {"property": {"Custom": "value"}}})
        );
    }

    #[test]
    fn test_inherited_fields() {
        let kind = ResourceKind::extends(&with_properties(), "Resource2").property("prop2");
        let r = Resource::from_fields(kind, Some("r"), [("prop1", 1), ("prop2", 2)]).unwrap();
        assert_eq!(
            r.to_json().unwrap(),
            json!({"Type": "Resource2", "Properties": {"prop1": 1, "prop2": 2}})
        );
    }

    #[test]
    fn test_clones_share_identity() {
        let r = Resource::new(with_properties());
        let alias = r.clone();
        alias.set_name("shared");
        assert_eq!(r.name().as_deref(), Some("shared"));
        assert!(r.ptr_eq(&alias));
        assert!(!r.ptr_eq(&Resource::new(with_properties())));
    }
}
