use thiserror::Error;

/// Everything that can abort the pipeline. None of these are recovered
/// locally; they bubble up to main and terminate the process nonzero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load cluster configuration: {0}")]
    ConfigLoad(#[source] kube::config::InferConfigError),

    #[error("could not build cluster client: {0}")]
    ClientInit(#[source] kube::Error),

    #[error("cluster query failed: {0}")]
    ClusterQuery(#[source] kube::Error),
}
