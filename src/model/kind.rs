//! Declarative schema descriptors for resource kinds

use serde_json::Value as JsonValue;

/// Separator between namespace segments of a type name
pub const TYPE_SEPARATOR: &str = "::";

/// Reshapes a resolved property value into a custom wire shape
pub type Projection = fn(JsonValue) -> JsonValue;

/// Whether a field is a configured input or a platform-produced output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Property,
    Attribute,
}

/// One declared field of a resource kind
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub slot: SlotKind,
    /// Value the slot starts out with
    pub default: Option<JsonValue>,
    /// Custom projection applied to resolved property values
    pub projection: Option<Projection>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, slot: SlotKind) -> Self {
        Self {
            name: name.into(),
            slot,
            default: None,
            projection: None,
        }
    }
}

/// Schema of a resource kind: its type name and ordered field table
///
/// Kinds are plain data. A kind built with [`ResourceKind::extends`] starts
/// with a copy of its parent's fields, so derived kinds are additive.
#[derive(Debug, Clone)]
pub struct ResourceKind {
    namespace: Vec<String>,
    name: String,
    type_tag: Option<String>,
    fields: Vec<FieldSpec>,
}

impl ResourceKind {
    /// Create a kind from a `::`-separated path such as `AWS::EC2::Instance`
    ///
    /// The last segment is the class name; a single segment has no namespace.
    pub fn new(path: &str) -> Self {
        let mut segments: Vec<String> = path.split(TYPE_SEPARATOR).map(str::to_string).collect();
        let name = segments.pop().unwrap_or_default();
        Self {
            namespace: segments,
            name,
            type_tag: None,
            fields: Vec::new(),
        }
    }

    /// Create a kind inheriting every field of `parent`
    pub fn extends(parent: &ResourceKind, path: &str) -> Self {
        let mut kind = Self::new(path);
        kind.fields = parent.fields.clone();
        kind
    }

    /// Override the emitted type name
    pub fn with_type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    /// Declare a property
    pub fn property(self, name: &str) -> Self {
        self.push(FieldSpec::new(name, SlotKind::Property))
    }

    /// Declare a property with a default value
    pub fn property_with_default(self, name: &str, default: impl Into<JsonValue>) -> Self {
        let mut spec = FieldSpec::new(name, SlotKind::Property);
        spec.default = Some(default.into());
        self.push(spec)
    }

    /// Declare a property whose resolved value is reshaped by `projection`
    pub fn projected_property(self, name: &str, projection: Projection) -> Self {
        let mut spec = FieldSpec::new(name, SlotKind::Property);
        spec.projection = Some(projection);
        self.push(spec)
    }

    /// Declare an attribute
    pub fn attribute(self, name: &str) -> Self {
        self.push(FieldSpec::new(name, SlotKind::Attribute))
    }

    fn push(mut self, spec: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.fields.push(spec),
        }
        self
    }

    /// Namespace-qualified type name, e.g. `AWS::EC2::Instance`
    pub fn type_name(&self) -> String {
        if let Some(tag) = &self.type_tag {
            return tag.clone();
        }
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!(
                "{}{}{}",
                self.namespace.join(TYPE_SEPARATOR),
                TYPE_SEPARATOR,
                self.name
            )
        }
    }

    /// Class name without namespace, the base for auto-generated names
    pub fn simple_name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field and its slot index
    pub fn field(&self, name: &str) -> Option<(usize, &FieldSpec)> {
        self.fields.iter().enumerate().find(|(_, f)| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Names of all declared fields of the given slot kind
    pub fn field_names(&self, slot: SlotKind) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.slot == slot)
            .map(|f| f.name.as_str())
            .collect()
    }
}
