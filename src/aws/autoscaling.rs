//! Auto Scaling

use crate::functions;
use crate::model::ResourceKind;

/// `AWS::AutoScaling::AutoScalingGroup`
pub fn auto_scaling_group() -> ResourceKind {
    ResourceKind::new("AWS::AutoScaling::AutoScalingGroup")
        .attribute("DependsOn")
        .attribute("UpdatePolicy")
        .property("AvailabilityZones")
        .property("Cooldown")
        .property("DesiredCapacity")
        .property("HealthCheckGracePeriod")
        .property("HealthCheckType")
        .property("LaunchConfigurationName")
        .property("LoadBalancerNames")
        .property("MaxSize")
        .property("MinSize")
        .property("NotificationConfiguration")
        .property("Tags")
        .property("VPCZoneIdentifier")
}

/// `AWS::AutoScaling::LaunchConfiguration`
pub fn launch_configuration() -> ResourceKind {
    ResourceKind::new("AWS::AutoScaling::LaunchConfiguration")
        .attribute("Metadata")
        .property("BlockDeviceMappings")
        .property("IamInstanceProfile")
        .property("ImageId")
        .property("InstanceMonitoring")
        .property("InstanceType")
        .property("KernelId")
        .property("KeyName")
        .property("RamDiskId")
        .property("SecurityGroups")
        .property("SpotPrice")
        .projected_property("UserData", functions::base64)
}
