//! Amazon EC2

use crate::functions;
use crate::model::ResourceKind;

/// `AWS::EC2::Instance`
///
/// `UserData` is wrapped in `Fn::Base64` on output.
pub fn instance() -> ResourceKind {
    ResourceKind::new("AWS::EC2::Instance")
        .attribute("Metadata")
        .attribute("DependsOn")
        .attribute("PrivateDnsName")
        .attribute("PrivateIp")
        .attribute("PublicDnsName")
        .attribute("PublicIp")
        .property("AvailabilityZone")
        .property("ImageId")
        .property("InstanceType")
        .property("SubnetId")
        .property("KeyName")
        .property("SecurityGroups")
        .property("SecurityGroupIds")
        .property("IamInstanceProfile")
        .property("Tags")
        .projected_property("UserData", functions::base64)
}
