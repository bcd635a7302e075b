//! cfn-builder - A declarative object model for CloudFormation templates
//!
//! This library lets you describe infrastructure as a graph of typed resources
//! and serializes that graph into a CloudFormation JSON document, rewriting
//! cross-resource references into `Ref`, `Fn::GetAtt` and `Fn::Join`
//! constructs and naming unnamed resources along the way.
//!
//! # Example
//!
//! ```rust
//! use cfn_builder::model::{Resource, ResourceKind};
//! use cfn_builder::{render, Stack};
//!
//! let foo = Resource::new(ResourceKind::new("Foo").property("p"))
//!     .with("p", 1)
//!     .unwrap();
//! let stack = Stack::new([&foo]).unwrap();
//!
//! let text = render(&stack).unwrap();
//! assert!(text.contains("\"Type\": \"Foo\""));
//! ```

pub mod aws;
pub mod error;
pub mod functions;
pub mod model;
pub mod reference;
pub mod renderer;
pub mod samples;
pub mod template;

pub use error::ModelError;
pub use model::{pseudo, Attribute, Parameter, Property, Resource, ResourceKind, Value};
pub use reference::Reference;
pub use renderer::{render_json, ConfigError, RenderConfig};
pub use template::{Collection, CollectionBuilder, Stack, StackBuilder, ToTemplate};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The object graph could not be projected
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The projected document could not be written as JSON
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a template to JSON text with default configuration
///
/// # Example
///
/// ```rust
/// use cfn_builder::{render, Stack};
///
/// let stack = Stack::builder().description("empty").build().unwrap();
/// let text = render(&stack).unwrap();
/// assert!(text.contains("\"AWSTemplateFormatVersion\": \"2010-09-09\""));
/// ```
pub fn render<T: ToTemplate + ?Sized>(template: &T) -> Result<String, RenderError> {
    render_with_config(template, &RenderConfig::default())
}

/// Render a template to JSON text with custom configuration
///
/// # Example
///
/// ```rust
/// use cfn_builder::{render_with_config, RenderConfig, Stack};
///
/// let stack = Stack::builder().description("empty").build().unwrap();
/// let config = RenderConfig::new()
///     .with_pretty_print(false)
///     .with_trailing_newline(false);
///
/// let text = render_with_config(&stack, &config).unwrap();
/// assert_eq!(text, r#"{"AWSTemplateFormatVersion":"2010-09-09","Description":"empty"}"#);
/// ```
pub fn render_with_config<T: ToTemplate + ?Sized>(
    template: &T,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let document = template.to_template()?;
    let text = render_json(&document, config)?;
    debug!(
        bytes = text.len(),
        pretty = config.pretty_print,
        "rendered template"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ResourceKind {
        ResourceKind::new("Widget").property("Peer").attribute("Arn")
    }

    #[test]
    fn test_render_collection() {
        let collection = Collection::new([&Resource::new(widget())]).unwrap();
        let text = render(&collection).unwrap();
        assert!(text.starts_with("{\n  \"Resources\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_render_single_resource() {
        let r = Resource::named(widget(), "w");
        let config = RenderConfig::new()
            .with_pretty_print(false)
            .with_trailing_newline(false);
        assert_eq!(render_with_config(&r, &config).unwrap(), r#"{"Type":"Widget"}"#);
    }

    #[test]
    fn test_unnamed_reference_is_a_model_error() {
        let peer = Resource::new(widget());
        let r = Resource::named(widget(), "w").with("Peer", &peer).unwrap();
        let err = render(&r).unwrap_err();
        assert!(matches!(err, RenderError::Model(ModelError::UnnamedReference { .. })));
    }

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            let first = Resource::new(widget());
            let second = Resource::new(widget()).with("Peer", first.clone()).unwrap();
            Stack::builder()
                .add(&first)
                .add(&second)
                .output("Arn", first.attribute("Arn").unwrap())
                .build()
                .unwrap()
        };
        assert_eq!(render(&build()).unwrap(), render(&build()).unwrap());
    }
}
