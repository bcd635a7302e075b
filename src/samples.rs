//! Ready-made templates
//!
//! Two small stacks built with the [`aws`](crate::aws) catalog. They show
//! typical usage and back the command-line tool.

use serde_json::json;

use crate::aws::{cloudformation, ec2, iam, route53};
use crate::error::ModelError;
use crate::model::{pseudo, Parameter, Resource, Value};
use crate::template::Stack;

/// Description used by [`route53_a`] unless overridden
pub const ROUTE53_A_DESCRIPTION: &str = "AWS CloudFormation Sample Template Route53_A: \
Sample template showing how to create an Amazon Route 53 A record that maps to the \
public IP address of an EC2 instance. It assumes that you already have a Hosted Zone \
registered with Amazon Route 53. **WARNING** This template creates an Amazon EC2 \
instance. You will be billed for the AWS resources used if you create a stack from \
this template.";

/// Description used by [`basic_node`] unless overridden
pub const BASIC_NODE_DESCRIPTION: &str =
    "Single EC2 node bootstrapped with cfn-init and registered in Route 53";

const REGION_AMIS: [(&str, &str); 2] = [("us-east-1", "ami-7f418316"), ("us-west-1", "ami-951945d0")];

const SERVICE_NAME: &str = "example1";
const ENVIRONMENT: &str = "prod";
const PUPPET_ENVIRONMENT: &str = "production";
const DATA_VOLUME_DEVICE: &str = "d";
const INSTANCE_TYPE: &str = "m1.small";

/// Settings shared by the sample templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOptions {
    /// Region the stack targets; picks the AMI when one is known
    pub region: String,
    /// Route 53 hosted zone, without the trailing dot
    pub hosted_zone: String,
    /// Replaces the sample's own description
    pub description: Option<String>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            hosted_zone: "aws.company-server.com".to_string(),
            description: None,
        }
    }
}

impl SampleOptions {
    fn description_or(&self, fallback: &str) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// AMI for `region`, or an `ImageId` parameter when the region is not mapped
fn image_id(region: &str) -> Result<(Value, Option<Parameter>), ModelError> {
    match REGION_AMIS.iter().find(|(r, _)| *r == region) {
        Some((_, ami)) => Ok((Value::from(*ami), None)),
        None => {
            let parameter = Parameter::named("ImageId")
                .option("Description", format!("AMI to launch in {region}"))?
                .option("AllowedPattern", "ami-[0-9a-f]+")?;
            Ok((Value::from(&parameter), Some(parameter)))
        }
    }
}

/// An EC2 instance with a Route 53 A record pointing at its public IP
///
/// The record's domain name is exported as the `DomainName` output.
pub fn route53_a(options: &SampleOptions) -> Result<Stack, ModelError> {
    let (image, image_parameter) = image_id(&options.region)?;

    // named up front so the record can embed a reference to it
    let instance = Resource::named(ec2::instance(), "ec2Instance").with("ImageId", image)?;

    let record = Resource::new(route53::record_set())
        .with("HostedZoneName", format!("{}.", options.hosted_zone))?
        .with("Comment", "DNS name for my instance.")?
        .with("ResourceRecords", vec![instance.attribute("PublicIp")?])?
        .with(
            "Name",
            format!("{}.{}.{}.", instance.reference()?, options.region, options.hosted_zone),
        )?
        .with("Type", "A")?
        .with("TTL", "900")?;

    let mut builder = Stack::builder()
        .description(options.description_or(ROUTE53_A_DESCRIPTION))
        .add(&instance)
        .add_named("myDNSRecord", &record)
        .output("DomainName", &record);
    if let Some(parameter) = image_parameter {
        builder = builder.add(parameter);
    }
    builder.build()
}

/// A node bootstrapped by cfn-init, signalling a wait condition when done
///
/// Creates an IAM user whose keys cfn-init uses to read stack metadata,
/// and two DNS records: one for the instance and a service CNAME.
pub fn basic_node(options: &SampleOptions) -> Result<Stack, ModelError> {
    let region = pseudo::region().reference()?;
    let stack_name = pseudo::stack_name().reference()?;
    let availability_zone = format!("{}c", options.region);
    let (image, image_parameter) = image_id(&options.region)?;

    let user = Resource::named(iam::user(), "CFNInitUser");
    let policy = Resource::named(iam::policy(), "CFNInitUserPolicy")
        .with("PolicyName", "AccessForCFNInit")?
        .with(
            "PolicyDocument",
            json!({
                "Statement": [{
                    "Effect": "Allow",
                    "Action": "cloudformation:DescribeStackResource",
                    "Resource": "*"
                }]
            }),
        )?
        .with("Users", vec![&user])?;
    let keys = Resource::named(iam::access_key(), "CFNKeys").with("UserName", &user)?;

    let facts = format!(
        "---\n\
         role_basicnode: true\n\
         server_role: basicnode\n\
         ec2_provisioned_zone: {availability_zone}\n\
         ec2_provisioned_region: {region}\n\
         jimdo_environment: {ENVIRONMENT}\n\
         puppet_environment: {PUPPET_ENVIRONMENT}\n\
         device_data_volume: /dev/xvd{DATA_VOLUME_DEVICE}\n\
         skip_monitoring: false\n\
         service_name: {SERVICE_NAME}\n\
         service_region_dns_name: {SERVICE_NAME}.{ENVIRONMENT}.{region}.{zone}.\n\
         service_global_dns_name: {SERVICE_NAME}.{ENVIRONMENT}.{zone}\n",
        zone = options.hosted_zone,
    );

    let instance = Resource::named(ec2::instance(), "EC2Instance")
        .with(
            "Metadata",
            json!({
                "AWS::CloudFormation::Init": {
                    "config": {
                        "files": {
                            "/etc/facter/facts.d/cfn.yaml": {
                                "content": facts,
                                "mode": "000644",
                                "owner": "root",
                                "group": "root"
                            }
                        }
                    }
                }
            }),
        )?
        .with("AvailabilityZone", availability_zone.as_str())?
        .with("ImageId", image)?
        .with("InstanceType", INSTANCE_TYPE)?;

    let handle = Resource::named(cloudformation::wait_condition_handle(), "WaitHandle");
    let condition = Resource::named(cloudformation::wait_condition(), "WaitCondition")
        .with("DependsOn", instance.name())?
        .with("Handle", &handle)?
        .with("Timeout", 600)?;

    let user_data = format!(
        "#!/bin/bash\n\
         /usr/bin/cfn-init --region '{region}' -s '{stack_name}' -r 'EC2Instance' \
         --access-key '{key}' --secret-key '{secret}' -v\n\
         /usr/bin/cfn-signal -e $? '{handle}'\n\
         while [ ! -e '/dev/xvd{DATA_VOLUME_DEVICE}' ]; do echo Waiting for EBS volume to attach; sleep 5; done\n\
         puppetd --test --waitforcert=120 --color=no --pluginsync --environment={PUPPET_ENVIRONMENT}\n",
        key = keys.reference()?,
        secret = keys.attribute("SecretAccessKey")?.reference()?,
        handle = handle.reference()?,
    );
    instance.set("UserData", user_data)?;

    let instance_dns = Resource::named(route53::record_set(), "Ec2InstanceDNS")
        .with("HostedZoneName", format!("{}.", options.hosted_zone))?
        .with(
            "Name",
            format!("{}.", instance.attribute("PrivateDnsName")?.reference()?),
        )?
        .with("Type", "A")?
        .with("ResourceRecords", vec![instance.attribute("PrivateIp")?])?
        .with("TTL", 60)?;

    let service_dns = Resource::named(route53::record_set(), "DNS")
        .with("HostedZoneName", format!("{}.", options.hosted_zone))?
        .with(
            "Name",
            format!(
                "{SERVICE_NAME}.{ENVIRONMENT}.{region}.{}.",
                options.hosted_zone
            ),
        )?
        .with("Type", "CNAME")?
        .with("ResourceRecords", vec![&instance_dns])?;

    let mut builder = Stack::builder()
        .description(options.description_or(BASIC_NODE_DESCRIPTION))
        .add(&policy)
        .add(&user)
        .add(&keys)
        .add(&instance)
        .add(&handle)
        .add(&condition)
        .add(&instance_dns)
        .add(&service_dns);
    if let Some(parameter) = image_parameter {
        builder = builder.add(parameter);
    }
    builder.build()
}
