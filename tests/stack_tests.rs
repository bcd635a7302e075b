//! Integration tests for stacks: parameters, outputs and composition

use cfn_builder::{pseudo, CollectionBuilder, ModelError, Parameter, Resource, ResourceKind, Stack};
use pretty_assertions::assert_eq;
use serde_json::json;

fn server() -> ResourceKind {
    ResourceKind::new("Test::Server")
        .attribute("Address")
        .property("Size")
        .property("Region")
}

#[test]
fn test_parameter_referenced_from_property() {
    let size = Parameter::with_options([
        ("Default", json!("small")),
        ("AllowedValues", json!(["small", "large"])),
    ])
    .unwrap();
    let r = Resource::named(server(), "web").with("Size", &size).unwrap();

    let stack = Stack::builder().add_named("Size", &size).add(&r).build().unwrap();
    assert_eq!(
        stack.to_json().unwrap(),
        json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Parameters": {
                "Size": {
                    "AllowedValues": ["small", "large"],
                    "Default": "small",
                    "Type": "String"
                }
            },
            "Resources": {
                "web": {"Type": "Test::Server", "Properties": {"Size": {"Ref": "Size"}}}
            }
        })
    );
}

#[test]
fn test_unnamed_parameters_are_auto_named() {
    let first = Parameter::new();
    let second = Parameter::new();
    let stack = Stack::new([&first, &second]).unwrap();

    assert_eq!(first.name().as_deref(), Some("Parameter"));
    assert_eq!(second.name().as_deref(), Some("Parameter1"));
    assert_eq!(stack.parameters().len(), 2);
}

#[test]
fn test_unknown_parameter_option() {
    let err = Parameter::with_options([("Color", "blue")]).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownParameterOption {
            options: vec!["Color".to_string()]
        }
    );
}

#[test]
fn test_pseudo_parameter_marker_in_property() {
    let region = pseudo::region().reference().unwrap();
    let r = Resource::named(server(), "web")
        .with("Region", format!("in-{region}"))
        .unwrap();

    let json = Stack::new([&r]).unwrap().to_json().unwrap();
    assert_eq!(
        json["Resources"]["web"]["Properties"]["Region"],
        json!({"Fn::Join": ["", ["in-", {"Ref": "AWS::Region"}]]})
    );
    assert!(json.get("Parameters").is_none());
}

#[test]
fn test_interpolated_output() {
    let r = Resource::named(server(), "web");
    let address = r.attribute("Address").unwrap().reference().unwrap();
    let stack = Stack::builder()
        .add(&r)
        .output("Url", format!("http://{address}/"))
        .build()
        .unwrap();

    assert_eq!(
        stack.to_json().unwrap()["Outputs"]["Url"],
        json!({"Fn::Join": ["", [
            "http://",
            {"Fn::GetAtt": ["web", "Address"]},
            "/"
        ]]})
    );
}

#[test]
fn test_output_referencing_unnamed_resource_fails() {
    let r = Resource::new(server());
    let mut stack = Stack::default();
    stack.add_output("Server", &r);

    let err = stack.to_json().unwrap_err();
    assert!(matches!(err, ModelError::UnnamedReference { .. }));
}

#[test]
fn test_outputs_see_names_assigned_by_the_stack() {
    let r = Resource::new(server());
    let stack = Stack::builder()
        .add(&r)
        .output("Server", &r)
        .build()
        .unwrap();

    assert_eq!(
        stack.to_json().unwrap()["Outputs"],
        json!({"Server": {"Ref": "Server"}})
    );
}

#[test]
fn test_fragments_compose_into_one_stack() {
    fn network() -> CollectionBuilder {
        CollectionBuilder::new().add(Resource::new(ResourceKind::new("Test::Network")))
    }

    let app = Resource::new(server());
    let stack = Stack::builder()
        .extend(network())
        .add(&app)
        .description("composed")
        .build()
        .unwrap();

    let names: Vec<&str> = stack.resources().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Network", "Server"]);
    assert_eq!(stack.description(), Some("composed"));
}

#[test]
fn test_same_resource_in_two_stacks_keeps_first_name() {
    let r = Resource::new(server());
    let first = Stack::new([&r]).unwrap();
    let second = Stack::builder().add_named("Other", &r).build().unwrap();

    assert!(first.resources().contains_key("Server"));
    assert!(second.resources().contains_key("Server"));
    assert!(!second.resources().contains_key("Other"));
}
