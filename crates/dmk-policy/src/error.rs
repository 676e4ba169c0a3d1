//! # Policy Error Types

use thiserror::Error;

use dmk_core::ProgramId;

/// Errors from program resolution and rule evaluation.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// No verification program with this id is registered.
    #[error("unknown verification program: {0}")]
    UnknownProgram(ProgramId),
}
