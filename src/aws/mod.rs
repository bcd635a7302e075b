//! Resource kinds for a subset of the AWS catalog
//!
//! Each function returns a fresh [`ResourceKind`](crate::model::ResourceKind)
//! describing one CloudFormation resource type. Fields that CloudFormation
//! places at the top level of a resource entry (`Metadata`, `DependsOn`) are
//! declared as attributes so they are emitted next to `Type`.

pub mod autoscaling;
pub mod cloudformation;
pub mod ec2;
pub mod iam;
pub mod route53;

use crate::model::ResourceKind;

/// Every kind this module declares
pub fn kinds() -> Vec<ResourceKind> {
    vec![
        autoscaling::auto_scaling_group(),
        autoscaling::launch_configuration(),
        cloudformation::wait_condition(),
        cloudformation::wait_condition_handle(),
        ec2::instance(),
        iam::access_key(),
        iam::instance_profile(),
        iam::policy(),
        iam::user(),
        route53::record_set(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_type_names_are_unique() {
        let names: BTreeSet<String> = kinds().iter().map(|k| k.type_name()).collect();
        assert_eq!(names.len(), kinds().len());
    }

    #[test]
    fn test_type_names_are_namespaced() {
        for kind in kinds() {
            let name = kind.type_name();
            assert!(name.starts_with("AWS::"), "{name} is not namespaced");
            assert_eq!(name.split("::").count(), 3, "{name}");
        }
    }
}
