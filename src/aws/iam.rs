//! AWS Identity and Access Management

use crate::model::ResourceKind;

/// `AWS::IAM::User`
pub fn user() -> ResourceKind {
    ResourceKind::new("AWS::IAM::User")
        .attribute("Arn")
        .property("Path")
        .property("Groups")
        .property("LoginProfile")
        .property("Policies")
}

/// `AWS::IAM::Policy`
pub fn policy() -> ResourceKind {
    ResourceKind::new("AWS::IAM::Policy")
        .property("PolicyName")
        .property("PolicyDocument")
        .property("Groups")
        .property("Users")
}

/// `AWS::IAM::AccessKey`; its `Ref` is the access key id
pub fn access_key() -> ResourceKind {
    ResourceKind::new("AWS::IAM::AccessKey")
        .attribute("SecretAccessKey")
        .property("UserName")
        .property_with_default("Status", "Active")
}

/// `AWS::IAM::InstanceProfile`
pub fn instance_profile() -> ResourceKind {
    ResourceKind::new("AWS::IAM::InstanceProfile")
        .attribute("Arn")
        .property("Path")
        .property("Roles")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resource;
    use serde_json::json;

    #[test]
    fn test_access_key_defaults_to_active() {
        let key = Resource::new(access_key()).with("UserName", "deploy").unwrap();
        assert_eq!(
            key.to_json().unwrap(),
            json!({
                "Type": "AWS::IAM::AccessKey",
                "Properties": {"Status": "Active", "UserName": "deploy"}
            })
        );
    }

    #[test]
    fn test_secret_is_an_attribute() {
        let key = Resource::named(access_key(), "Keys");
        assert!(key.property("SecretAccessKey").is_err());
        let secret = key.attribute("SecretAccessKey").unwrap();
        assert_eq!(secret.reference().unwrap().to_string(), "{Attribute|Keys|SecretAccessKey}");
    }
}
