//! Template assembly
//!
//! This module turns resource graphs into template documents: a
//! [`Collection`] settles member names, a [`Stack`] adds the template
//! metadata, and the resolver rewrites every embedded reference into its
//! CloudFormation wire construct.
//!
//! # Example
//!
//! ```rust
//! use cfn_builder::model::{Resource, ResourceKind};
//! use cfn_builder::template::Collection;
//!
//! let kind = ResourceKind::new("Widget").property("Peer");
//! let first = Resource::new(kind.clone());
//! let second = Resource::new(kind).with("Peer", &first).unwrap();
//!
//! let collection = Collection::new([&first, &second]).unwrap();
//! let json = collection.to_json().unwrap();
//! assert_eq!(json["Resources"]["Widget1"]["Properties"]["Peer"]["Ref"], "Widget");
//! ```

pub mod collection;
pub mod resolver;
pub mod stack;

pub use collection::{Collection, CollectionBuilder, Member, MAX_NAMING_ATTEMPTS};
pub use resolver::{resolve, resolve_json};
pub use stack::{Stack, StackBuilder, TEMPLATE_FORMAT_VERSION};

use serde_json::Value as JsonValue;

use crate::error::ModelError;
use crate::model::Resource;

/// Anything that can be projected into a template document
pub trait ToTemplate {
    fn to_template(&self) -> Result<JsonValue, ModelError>;
}

impl ToTemplate for Stack {
    fn to_template(&self) -> Result<JsonValue, ModelError> {
        self.to_json()
    }
}

impl ToTemplate for Collection {
    fn to_template(&self) -> Result<JsonValue, ModelError> {
        self.to_json()
    }
}

impl ToTemplate for Resource {
    fn to_template(&self) -> Result<JsonValue, ModelError> {
        self.to_json()
    }
}
