//! Stacks - collections carrying template metadata

use std::collections::BTreeMap;

use serde_json::{Map, Value as JsonValue};

use super::collection::{Collection, CollectionBuilder, Member};
use super::resolver::resolve;
use crate::error::ModelError;
use crate::model::{Parameter, Resource, Value};

/// The only template format version CloudFormation accepts
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// Assembles a [`Stack`]
#[derive(Debug, Clone, Default)]
pub struct StackBuilder {
    members: CollectionBuilder,
    description: Option<String>,
    outputs: Vec<(String, Value)>,
}

impl StackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, member: impl Into<Member>) -> Self {
        self.members = self.members.add(member);
        self
    }

    pub fn add_named(mut self, key: impl Into<String>, member: impl Into<Member>) -> Self {
        self.members = self.members.add_named(key, member);
        self
    }

    /// Append a reusable group of members
    pub fn extend(mut self, members: CollectionBuilder) -> Self {
        self.members = self.members.extend(members);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn output(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.outputs.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<Stack, ModelError> {
        Ok(Stack {
            collection: self.members.build()?,
            description: self.description,
            outputs: self.outputs.into_iter().collect(),
        })
    }
}

/// A complete template: resources, parameters, outputs and description
#[derive(Debug, Clone, Default)]
pub struct Stack {
    collection: Collection,
    description: Option<String>,
    outputs: BTreeMap<String, Value>,
}

impl Stack {
    /// Build a stack from positional members
    pub fn new<M: Into<Member>>(members: impl IntoIterator<Item = M>) -> Result<Self, ModelError> {
        Ok(Self {
            collection: Collection::new(members)?,
            ..Self::default()
        })
    }

    pub fn builder() -> StackBuilder {
        StackBuilder::new()
    }

    pub fn format_version(&self) -> &'static str {
        TEMPLATE_FORMAT_VERSION
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        self.collection.resources()
    }

    pub fn parameters(&self) -> &BTreeMap<String, Parameter> {
        self.collection.parameters()
    }

    pub fn outputs(&self) -> &BTreeMap<String, Value> {
        &self.outputs
    }

    /// Add or replace an output; the value is resolved at serialization
    pub fn add_output(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.outputs.insert(name.into(), value.into());
    }

    /// The full template document; empty sections are left out
    pub fn to_json(&self) -> Result<JsonValue, ModelError> {
        let mut document = Map::new();
        document.insert(
            "AWSTemplateFormatVersion".to_string(),
            JsonValue::String(TEMPLATE_FORMAT_VERSION.to_string()),
        );

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            document.insert(
                "Description".to_string(),
                JsonValue::String(description.to_string()),
            );
        }

        let parameters = self.collection.parameters_json();
        if !parameters.is_empty() {
            document.insert("Parameters".to_string(), JsonValue::Object(parameters));
        }

        let resources = self.collection.resources_json()?;
        if !resources.is_empty() {
            document.insert("Resources".to_string(), JsonValue::Object(resources));
        }

        if !self.outputs.is_empty() {
            let mut outputs = Map::new();
            for (name, value) in &self.outputs {
                outputs.insert(name.clone(), resolve(value)?);
            }
            document.insert("Outputs".to_string(), JsonValue::Object(outputs));
        }

        Ok(JsonValue::Object(document))
    }
}
