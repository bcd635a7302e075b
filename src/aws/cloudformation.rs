//! CloudFormation helper resources

use crate::model::ResourceKind;

/// `AWS::CloudFormation::WaitConditionHandle`
pub fn wait_condition_handle() -> ResourceKind {
    ResourceKind::new("AWS::CloudFormation::WaitConditionHandle")
}

/// `AWS::CloudFormation::WaitCondition`
pub fn wait_condition() -> ResourceKind {
    ResourceKind::new("AWS::CloudFormation::WaitCondition")
        .attribute("DependsOn")
        .attribute("Data")
        .property("Handle")
        .property("Timeout")
        .property("Count")
}
