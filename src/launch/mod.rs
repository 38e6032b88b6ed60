use std::convert::Infallible;
use std::io;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

pub mod wrapper;

pub use wrapper::WrapperInvocation;

/// Literal suffix that marks the running binary as a wrapper around the
/// payload executable sitting next to it.
pub const WRAPPER_MARKER: &str = ".wrapper";

pub type LaunchResult<T> = std::result::Result<T, LaunchError>;

/// Every variant is fatal: a broken packaging invariant cannot be repaired
/// at runtime, so callers report and terminate with a non-zero status.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to resolve the running process image path: {source}")]
    SelfPath {
        #[source]
        source: io::Error,
    },
    #[error(
        "failed to detect path to actual application: `{marker}` suffix missing from `{path}`",
        marker = WRAPPER_MARKER,
        path = self_path.display()
    )]
    MarkerMissing { self_path: PathBuf },
    #[error(
        "failed to detect path to actual application: `{path}` is not a file path",
        path = target_path.display()
    )]
    InvalidTarget { target_path: PathBuf },
    #[error("failed to replace process image with `{path}`: {source}", path = target_path.display())]
    Handoff {
        target_path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Absolute path of the currently executing process image, via the OS
/// self-reference (`/proc/self/exe` on Linux).
pub fn resolve_self_path() -> LaunchResult<PathBuf> {
    std::env::current_exe().map_err(|source| LaunchError::SelfPath { source })
}

/// Resolves the self path and derives the payload path from it.
pub fn resolve_invocation() -> LaunchResult<WrapperInvocation> {
    let self_path = resolve_self_path()?;
    WrapperInvocation::derive(&self_path)
}

/// Terminal process handoff: replaces the current process image with the
/// payload, passing argv0 equal to the payload path and nothing else; the
/// environment is inherited unchanged. On success control passes entirely to
/// the new image and this function never returns. The returned error is
/// always fatal to the caller.
pub fn hand_off(target: &Path) -> LaunchResult<Infallible> {
    tracing::info!(target = %target.display(), "replacing process image with payload");
    let source = Command::new(target).arg0(target).exec();
    Err(LaunchError::Handoff {
        target_path: target.to_path_buf(),
        source,
    })
}

/// Seam between the dialog and the irreversible exec call, so action
/// dispatch can be tested with a recording fake.
pub trait PayloadLauncher {
    fn launch(&self, invocation: &WrapperInvocation) -> LaunchResult<Infallible>;
}

pub struct ProcessImageLauncher;

impl PayloadLauncher for ProcessImageLauncher {
    fn launch(&self, invocation: &WrapperInvocation) -> LaunchResult<Infallible> {
        hand_off(invocation.target_path())
    }
}
