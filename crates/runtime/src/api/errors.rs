//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the reward collaborator, command providers and
//! background workers so clients can bubble them up with consistent context.
use client_blockchain_core::{LedgerError, WalletError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to resolve the reward account")]
    Wallet(#[from] WalletError),

    #[error("failed to enumerate collected rewards")]
    Ledger(#[from] LedgerError),

    #[error("command input failed")]
    Input(#[from] std::io::Error),

    #[error("reward worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
