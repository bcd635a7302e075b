//! Template parameters

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value as JsonValue};

use crate::error::ModelError;
use crate::reference::Reference;

/// Options a parameter declaration may carry
pub const PARAMETER_OPTIONS: [&str; 11] = [
    "Type",
    "Default",
    "NoEcho",
    "AllowedValues",
    "AllowedPattern",
    "MaxLength",
    "MinLength",
    "MaxValue",
    "MinValue",
    "Description",
    "ConstraintDescription",
];

/// Parameter type used when none is given
pub const DEFAULT_PARAMETER_TYPE: &str = "String";

/// A named input to the whole template
///
/// Like [`Resource`](super::Resource), a `Parameter` is a shared handle so it
/// can be referenced before the collection it ends up in assigns its name.
#[derive(Clone)]
pub struct Parameter {
    inner: Rc<ParameterInner>,
}

struct ParameterInner {
    name: RefCell<Option<String>>,
    options: RefCell<BTreeMap<String, JsonValue>>,
    pseudo: bool,
}

impl Parameter {
    /// An unnamed `String` parameter
    pub fn new() -> Self {
        let mut options = BTreeMap::new();
        options.insert(
            "Type".to_string(),
            JsonValue::String(DEFAULT_PARAMETER_TYPE.to_string()),
        );
        Self::from_parts(None, options, false)
    }

    /// A named `String` parameter
    pub fn named(name: impl Into<String>) -> Self {
        let parameter = Self::new();
        parameter.set_name(name);
        parameter
    }

    /// Create a parameter from option/value pairs
    ///
    /// Every key must be one of [`PARAMETER_OPTIONS`]; `Type` defaults to
    /// `String` when absent.
    pub fn with_options<K, V>(options: impl IntoIterator<Item = (K, V)>) -> Result<Self, ModelError>
    where
        K: Into<String>,
        V: Into<JsonValue>,
    {
        let options: BTreeMap<String, JsonValue> = options
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        check_options(options.keys())?;

        let parameter = Self::new();
        parameter.inner.options.borrow_mut().extend(options);
        Ok(parameter)
    }

    /// Set one option and hand the parameter back, for chained construction
    pub fn option(self, key: &str, value: impl Into<JsonValue>) -> Result<Self, ModelError> {
        self.set_option(key, value)?;
        Ok(self)
    }

    pub fn set_option(&self, key: &str, value: impl Into<JsonValue>) -> Result<(), ModelError> {
        check_options(std::iter::once(key))?;
        self.inner
            .options
            .borrow_mut()
            .insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn get_option(&self, key: &str) -> Option<JsonValue> {
        self.inner.options.borrow().get(key).cloned()
    }

    /// A platform-provided parameter such as `AWS::Region`
    ///
    /// Pseudo parameters can be referenced but are never declared in the
    /// template's `Parameters` section.
    pub fn pseudo(name: &str) -> Self {
        Self::from_parts(Some(name.to_string()), BTreeMap::new(), true)
    }

    pub fn is_pseudo(&self) -> bool {
        self.inner.pseudo
    }

    pub fn name(&self) -> Option<String> {
        self.inner.name.borrow().clone().filter(|n| !n.is_empty())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.inner.name.borrow_mut() = Some(name.into());
    }

    pub fn ptr_eq(&self, other: &Parameter) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Reference to this parameter; requires a name
    pub fn reference(&self) -> Result<Reference, ModelError> {
        self.name()
            .map(Reference::Parameter)
            .ok_or_else(|| ModelError::unnamed("unnamed parameter"))
    }

    /// The parameter declaration: its options, verbatim
    pub fn to_json(&self) -> JsonValue {
        let options: Map<String, JsonValue> = self
            .inner
            .options
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        JsonValue::Object(options)
    }

    fn from_parts(name: Option<String>, options: BTreeMap<String, JsonValue>, pseudo: bool) -> Self {
        Self {
            inner: Rc::new(ParameterInner {
                name: RefCell::new(name),
                options: RefCell::new(options),
                pseudo,
            }),
        }
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name())
            .field("options", &self.inner.options.borrow())
            .field("pseudo", &self.inner.pseudo)
            .finish()
    }
}

fn check_options<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) -> Result<(), ModelError> {
    let unknown: Vec<String> = keys
        .into_iter()
        .filter(|k| !PARAMETER_OPTIONS.contains(&k.as_ref()))
        .map(|k| k.as_ref().to_string())
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ModelError::UnknownParameterOption { options: unknown })
    }
}

/// Pseudo parameters provided by CloudFormation
pub mod pseudo {
    use super::Parameter;

    pub fn region() -> Parameter {
        Parameter::pseudo("AWS::Region")
    }

    pub fn stack_name() -> Parameter {
        Parameter::pseudo("AWS::StackName")
    }

    pub fn account_id() -> Parameter {
        Parameter::pseudo("AWS::AccountId")
    }

    pub fn notification_arns() -> Parameter {
        Parameter::pseudo("AWS::NotificationARNs")
    }

    pub fn no_value() -> Parameter {
        Parameter::pseudo("AWS::NoValue")
    }
}
