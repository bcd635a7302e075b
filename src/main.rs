//! cfn-builder CLI
//!
//! Usage:
//!   cfn-builder [OPTIONS] <SAMPLE>
//!
//! Options:
//!   -c, --config <FILE>        Render configuration (TOML format)
//!       --compact              Write the template on a single line
//!   -r, --region <REGION>      Region the stack targets
//!       --hosted-zone <ZONE>   Route 53 hosted zone, without the trailing dot
//!   -d, --description <TEXT>   Replace the sample's description
//!   -h, --help                 Print help
//!
//! Set RUST_LOG (e.g. `RUST_LOG=cfn_builder=debug`) to see naming decisions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use cfn_builder::samples::{self, SampleOptions};
use cfn_builder::{render_with_config, RenderConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Sample {
    /// EC2 instance with a Route 53 A record
    #[value(name = "route53-a")]
    Route53A,
    /// cfn-init bootstrapped node with IAM keys and DNS entries
    #[value(name = "basic-node")]
    BasicNode,
}

#[derive(Parser)]
#[command(name = "cfn-builder")]
#[command(about = "Render sample CloudFormation templates")]
struct Cli {
    /// Template to render
    #[arg(value_enum)]
    sample: Sample,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the template on a single line
    #[arg(long)]
    compact: bool,

    /// Region the stack targets
    #[arg(short, long, default_value = "us-east-1")]
    region: String,

    /// Route 53 hosted zone, without the trailing dot
    #[arg(long, default_value = "aws.company-server.com")]
    hosted_zone: String,

    /// Replace the sample's description
    #[arg(short, long)]
    description: Option<String>,
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_tracing();
    let cli = Cli::parse();

    // Load render configuration
    let config = match &cli.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };
    let config = if cli.compact {
        config.with_pretty_print(false)
    } else {
        config
    };

    let options = SampleOptions {
        region: cli.region,
        hosted_zone: cli.hosted_zone,
        description: cli.description,
    };
    let stack = match cli.sample {
        Sample::Route53A => samples::route53_a(&options),
        Sample::BasicNode => samples::basic_node(&options),
    };
    let stack = match stack {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error building template: {}", e);
            std::process::exit(1);
        }
    };

    match render_with_config(&stack, &config) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
