mod commands;
mod errors;
mod images;
mod k8s;
mod models;
mod table;
pub mod utils;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kimages", about = "List pods and the container images they run", author, version, long_about = None)]
struct Cli {
    /// Only show pods from this namespace.
    /// If -n is missing, lists pods across all namespaces.
    #[arg(short, long)]
    namespace: Option<String>,
    /// Cluster API timeout in seconds.
    /// If missing, the transport default applies.
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the table on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 1. Initialize Crypto
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // 2. Initialize Client ONCE
    let pb = utils::create_spinner("Initializing Kubernetes client...");
    let client = k8s::ClusterClient::connect(cli.timeout.map(Duration::from_secs)).await?;
    pb.finish_and_clear();

    commands::images::run(&client, cli.namespace.as_deref()).await?;
    Ok(())
}
