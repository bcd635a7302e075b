//! Amazon Route 53

use crate::model::ResourceKind;

/// `AWS::Route53::RecordSet`
pub fn record_set() -> ResourceKind {
    ResourceKind::new("AWS::Route53::RecordSet")
        .property("HostedZoneId")
        .property("HostedZoneName")
        .property("Comment")
        .property("Name")
        .property("Type")
        .property("TTL")
        .property("ResourceRecords")
        .property("AliasTarget")
        .property("SetIdentifier")
        .property("Weight")
}
