//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep error
//! handling consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid spot number: {0}")]
    InvalidSpot(u32),

    #[error("Invalid phone number '{0}': 10 digits required")]
    InvalidPhone(String),

    #[error("Invalid {0}: {1}")]
    InvalidField(&'static str, String),

    #[error("Car with plate '{0}' is already parked")]
    DuplicatePlate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No cars parked")]
    NothingParked,

    #[error("No parked car found with plate '{0}'")]
    PlateNotFound(String),

    #[error("Ledger inconsistency: {0}")]
    LedgerInconsistency(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
