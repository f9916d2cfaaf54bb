//! Unified application error type.
//! The fallible surface is deliberately small: degraded paths (missing or
//! corrupt blobs, absent mutation targets) recover locally with a diagnostic
//! log instead of returning errors.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Settings validation
    // ---------------------------
    #[error("max parking hours out of range [1, 8760]: {0}")]
    InvalidMaxHours(i64),
}

pub type AppResult<T> = Result<T, AppError>;
