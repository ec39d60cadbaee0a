//! Prints bare metal nodes with their ports and port groups as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use ironic_node_info::{
    CloudConfig, DEFAULT_API_VERSION, FailureResponse, IronicClient, IronicError, IronicResult,
    NodeInfoQuery, NodeInfoResponse,
};

/// Query OpenStack Bare Metal nodes.
#[derive(Parser)]
#[command(name = "baremetal-node-info")]
#[command(about = "Show bare metal nodes with their ports and port groups")]
struct Cli {
    /// Named cloud from clouds.yaml (or set `OS_CLOUD` env var).
    #[arg(long, env = "OS_CLOUD")]
    cloud: Option<String>,

    /// Path to clouds.yaml instead of the standard locations.
    #[arg(long, requires = "cloud")]
    clouds_file: Option<PathBuf>,

    /// Bare Metal endpoint for noauth deployments (or set `IRONIC_URL`).
    #[arg(long, env = "IRONIC_URL")]
    ironic_url: Option<String>,

    /// Node name or UUID.
    #[arg(long)]
    node: Option<String>,

    /// MAC address of one of the node's ports. Ignored when `--node` is given.
    #[arg(long)]
    mac: Option<String>,

    /// Bare Metal API microversion.
    #[arg(long, default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Skip TLS certificate verification.
    #[arg(long, default_value = "false")]
    insecure: bool,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(response) => print_json(&response),
        Err(e) => {
            error!(error = %e, "Node info query failed");
            print_json(&FailureResponse::new(e.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> IronicResult<NodeInfoResponse> {
    let client = build_client(cli).await?;
    let query = NodeInfoQuery::from_options(cli.node.as_deref(), cli.mac.as_deref())?;
    debug!(targeted = query.is_targeted(), "Running node info query");

    let nodes = client.node_info(&query).await?;
    Ok(NodeInfoResponse::new(nodes))
}

async fn build_client(cli: &Cli) -> IronicResult<IronicClient> {
    let mut builder = IronicClient::builder()
        .accept_invalid_certs(cli.insecure)
        .api_version(&cli.api_version)?;

    if let Some(url) = &cli.ironic_url {
        builder = builder.endpoint(url)?;
    }

    match &cli.cloud {
        Some(name) => {
            let cloud = CloudConfig::load(cli.clouds_file.as_deref(), name).await?;
            builder.cloud(&cloud)?.build()
        }
        None if cli.ironic_url.is_some() => builder.build(),
        None => Err(IronicError::Config(
            "Either --cloud or --ironic-url must be provided".to_string(),
        )),
    }
}

fn print_json<T: Serialize>(payload: &T) -> ExitCode {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize output");
            ExitCode::FAILURE
        }
    }
}
