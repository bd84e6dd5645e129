use gk_algo::AlgoError;
use gk_snapshot::SnapshotError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Algorithm error: {0}")]
    Algo(#[from] AlgoError),
}
