//! The resource object model
//!
//! A [`ResourceKind`] is the data-table schema of one resource type. A
//! [`Resource`] instantiates a kind with one slot per declared field, written
//! through [`Resource::set`]. Slot values are [`Value`]s, which may themselves
//! hold other resources, attributes and parameters.

pub mod kind;
pub mod parameter;
pub mod resource;
pub mod value;

pub use kind::{FieldSpec, Projection, ResourceKind, SlotKind};
pub use parameter::{pseudo, Parameter, PARAMETER_OPTIONS};
pub use resource::{Attribute, Property, Resource};
pub use value::Value;
