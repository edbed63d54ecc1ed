//! Error types for Supersonic

use crate::compat::EnumMismatch;
use crate::loader::GateState;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupersonicError {
    #[error("failed to load native module '{module}' from '{}': {reason}", .path.display())]
    NativeLoad {
        module: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("{operation} is not valid while the native gate is {state}")]
    InvalidLifecycleState {
        operation: &'static str,
        state: GateState,
    },

    #[error("binding enums out of sync with native headers: {}", format_mismatches(.0))]
    CompatibilityMismatch(Vec<EnumMismatch>),

    #[error("failed to release native module(s): {}", format_release_failures(.0))]
    Unload(Vec<ReleaseFailure>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single native module that could not be released during unload.
#[derive(Debug, Clone)]
pub struct ReleaseFailure {
    pub module: &'static str,
    pub reason: String,
}

fn format_mismatches(mismatches: &[EnumMismatch]) -> String {
    mismatches
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_release_failures(failures: &[ReleaseFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.module, f.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SupersonicError>;
