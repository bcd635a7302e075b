//! Resource collections and deterministic auto-naming

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::error::ModelError;
use crate::model::{Parameter, Resource};

/// Upper bound on candidate names tried for one unnamed member
pub const MAX_NAMING_ATTEMPTS: usize = 1000;

/// Base for auto-generated parameter names
const PARAMETER_BASE_NAME: &str = "Parameter";

/// Anything a collection can hold
#[derive(Debug, Clone)]
pub enum Member {
    Resource(Resource),
    Parameter(Parameter),
}

impl Member {
    fn name(&self) -> Option<String> {
        match self {
            Member::Resource(r) => r.name(),
            Member::Parameter(p) => p.name(),
        }
    }

    fn set_name(&self, name: &str) {
        match self {
            Member::Resource(r) => r.set_name(name),
            Member::Parameter(p) => p.set_name(name),
        }
    }

    fn base_name(&self) -> String {
        match self {
            Member::Resource(r) => r.kind().simple_name().to_string(),
            Member::Parameter(_) => PARAMETER_BASE_NAME.to_string(),
        }
    }
}

impl From<Resource> for Member {
    fn from(r: Resource) -> Self {
        Member::Resource(r)
    }
}

impl From<&Resource> for Member {
    fn from(r: &Resource) -> Self {
        Member::Resource(r.clone())
    }
}

impl From<Parameter> for Member {
    fn from(p: Parameter) -> Self {
        Member::Parameter(p)
    }
}

impl From<&Parameter> for Member {
    fn from(p: &Parameter) -> Self {
        Member::Parameter(p.clone())
    }
}

/// Collects members in order before names are settled
#[derive(Debug, Clone, Default)]
pub struct CollectionBuilder {
    entries: Vec<(Option<String>, Member)>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member positionally
    pub fn add(mut self, member: impl Into<Member>) -> Self {
        self.entries.push((None, member.into()));
        self
    }

    /// Add a member under a key; the key becomes its name if it has none
    pub fn add_named(mut self, key: impl Into<String>, member: impl Into<Member>) -> Self {
        self.entries.push((Some(key.into()), member.into()));
        self
    }

    /// Append every member of another builder, after the current ones
    pub fn extend(mut self, other: CollectionBuilder) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Settle every member's name and build the collection
    ///
    /// Keyed members without a name take their key. Remaining unnamed members
    /// are named in insertion order from their simple type name, suffixed with
    /// the smallest positive integer that keeps the name unused. Two members
    /// with the same explicit name collapse to the one added last.
    pub fn build(self) -> Result<Collection, ModelError> {
        let mut taken: HashSet<String> = HashSet::new();
        for (key, member) in &self.entries {
            if let (Some(key), None) = (key, member.name()) {
                member.set_name(key);
            }
            if let Some(name) = member.name() {
                taken.insert(name);
            }
        }

        let mut collection = Collection::default();
        for (_, member) in self.entries {
            let name = match member.name() {
                Some(name) => name,
                None => {
                    let name = free_name(&member.base_name(), &taken)?;
                    debug!(name = %name, "auto-named collection member");
                    member.set_name(&name);
                    taken.insert(name.clone());
                    name
                }
            };
            let replaced = match member {
                Member::Resource(r) => collection.resources.insert(name.clone(), r).is_some(),
                Member::Parameter(p) => collection.parameters.insert(name.clone(), p).is_some(),
            };
            if replaced {
                debug!(name = %name, "duplicate member name, keeping the last one");
            }
        }
        Ok(collection)
    }
}

/// First of `base`, `base1`, `base2`, ... not in `taken`
fn free_name(base: &str, taken: &HashSet<String>) -> Result<String, ModelError> {
    (0..MAX_NAMING_ATTEMPTS)
        .map(|attempt| {
            if attempt == 0 {
                base.to_string()
            } else {
                format!("{}{}", base, attempt)
            }
        })
        .find(|candidate| !taken.contains(candidate))
        .ok_or_else(|| ModelError::NamingExhausted {
            base: base.to_string(),
            attempts: MAX_NAMING_ATTEMPTS,
        })
}

/// A set of uniquely named resources and parameters
///
/// Each collection owns its own name mappings.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    resources: BTreeMap<String, Resource>,
    parameters: BTreeMap<String, Parameter>,
}

impl Collection {
    /// Build a collection from positional members
    pub fn new<M: Into<Member>>(members: impl IntoIterator<Item = M>) -> Result<Self, ModelError> {
        members
            .into_iter()
            .fold(CollectionBuilder::new(), |builder, member| builder.add(member))
            .build()
    }

    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    pub fn parameters(&self) -> &BTreeMap<String, Parameter> {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.parameters.is_empty()
    }

    /// `{"Resources": {...}}`
    pub fn to_json(&self) -> Result<JsonValue, ModelError> {
        let mut document = Map::new();
        document.insert(
            "Resources".to_string(),
            JsonValue::Object(self.resources_json()?),
        );
        Ok(JsonValue::Object(document))
    }

    /// Each resource's template entry, keyed by name
    pub(crate) fn resources_json(&self) -> Result<Map<String, JsonValue>, ModelError> {
        let mut resources = Map::new();
        for (name, resource) in &self.resources {
            resources.insert(name.clone(), resource.to_json()?);
        }
        Ok(resources)
    }

    /// Declared (non-pseudo) parameters, keyed by name
    pub(crate) fn parameters_json(&self) -> Map<String, JsonValue> {
        self.parameters
            .iter()
            .filter(|(_, p)| !p.is_pseudo())
            .map(|(name, p)| (name.clone(), p.to_json()))
            .collect()
    }
}
