//! Reference markers embedded in template strings

use std::fmt;

use serde_json::Value as JsonValue;

use crate::functions;

/// Something a template position can point at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// Another resource, by logical name
    Resource(String),
    /// A platform-produced attribute of a named resource
    Attribute { resource: String, field: String },
    /// A template parameter (or pseudo parameter)
    Parameter(String),
}

impl Reference {
    pub fn attribute(resource: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Attribute {
            resource: resource.into(),
            field: field.into(),
        }
    }

    /// Marker category as written in the placeholder syntax
    pub fn category(&self) -> &'static str {
        match self {
            Reference::Resource(_) => "Resource",
            Reference::Attribute { .. } => "Attribute",
            Reference::Parameter(_) => "Parameter",
        }
    }

    /// Wire form: `Ref` for resources and parameters, `Fn::GetAtt` for attributes
    pub fn to_wire(&self) -> JsonValue {
        match self {
            Reference::Resource(name) | Reference::Parameter(name) => functions::reference(name),
            Reference::Attribute { resource, field } => functions::get_att(resource, field),
        }
    }

    /// Parse a complete marker such as `{Attribute|web|PublicIp}`
    ///
    /// Returns None for anything that is not a well-formed marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let body = marker.strip_prefix('{')?.strip_suffix('}')?;
        let parts: Vec<&str> = body.split('|').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        match parts.as_slice() {
            ["Resource", name] => Some(Reference::Resource(name.to_string())),
            ["Parameter", name] => Some(Reference::Parameter(name.to_string())),
            ["Attribute", resource, field] => Some(Reference::attribute(*resource, *field)),
            _ => None,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Resource(name) | Reference::Parameter(name) => {
                write!(f, "{{{}|{}}}", self.category(), name)
            }
            Reference::Attribute { resource, field } => {
                write!(f, "{{Attribute|{}|{}}}", resource, field)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_markers() {
        assert_eq!(Reference::Resource("r1".into()).to_string(), "{Resource|r1}");
        assert_eq!(
            Reference::attribute("RES1", "attr1").to_string(),
            "{Attribute|RES1|attr1}"
        );
        assert_eq!(
            Reference::Parameter("AWS::Region".into()).to_string(),
            "{Parameter|AWS::Region}"
        );
    }

    #[test]
    fn test_from_marker_round_trips_display() {
        let refs = [
            Reference::Resource("Namespace::Name".into()),
            Reference::attribute("web", "PublicIp"),
            Reference::Parameter("KeyName".into()),
        ];
        for r in refs {
            assert_eq!(Reference::from_marker(&r.to_string()), Some(r));
        }
    }

    #[test]
    fn test_from_marker_rejects_malformed() {
        assert_eq!(Reference::from_marker("{Resource|}"), None);
        assert_eq!(Reference::from_marker("{Resource|a|b}"), None);
        assert_eq!(Reference::from_marker("{Attribute|a}"), None);
        assert_eq!(Reference::from_marker("{Output|a}"), None);
        assert_eq!(Reference::from_marker("Resource|a"), None);
    }

    #[test]
    fn test_wire_forms() {
        assert_eq!(Reference::Resource("r1".into()).to_wire(), json!({"Ref": "r1"}));
        assert_eq!(
            Reference::attribute("r1", "attr1").to_wire(),
            json!({"Fn::GetAtt": ["r1", "attr1"]})
        );
    }
}
