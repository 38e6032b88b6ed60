use std::ffi::OsString;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use super::{LaunchError, LaunchResult, WRAPPER_MARKER};

/// The running binary's own path plus the payload path derived from it.
/// Created once per process start and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperInvocation {
    self_path: PathBuf,
    target_path: PathBuf,
}

impl WrapperInvocation {
    /// Strips the wrapper marker anchored at the end of `self_path` to find
    /// the payload executable. A missing marker, or a marker with anything
    /// after it, is a protocol violation; a result that is empty or names a
    /// directory is equally unusable. Pure string transformation: whether
    /// the payload actually exists is only checked by the exec call itself.
    pub fn derive(self_path: &Path) -> LaunchResult<Self> {
        let raw = self_path.as_os_str().as_bytes();
        let Some(stripped) = raw.strip_suffix(WRAPPER_MARKER.as_bytes()) else {
            return Err(LaunchError::MarkerMissing {
                self_path: self_path.to_path_buf(),
            });
        };

        let target_path = PathBuf::from(OsString::from_vec(stripped.to_vec()));
        if stripped.is_empty() || stripped.ends_with(b"/") {
            return Err(LaunchError::InvalidTarget { target_path });
        }

        Ok(Self {
            self_path: self_path.to_path_buf(),
            target_path,
        })
    }

    pub fn self_path(&self) -> &Path {
        &self.self_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_strips_trailing_marker() {
        let invocation = WrapperInvocation::derive(Path::new("/opt/app/AppRun.wrapper"))
            .expect("suffixed path should derive");
        assert_eq!(invocation.self_path(), Path::new("/opt/app/AppRun.wrapper"));
        assert_eq!(invocation.target_path(), Path::new("/opt/app/AppRun"));
    }

    #[test]
    fn derive_without_marker_is_a_protocol_violation() {
        let err = WrapperInvocation::derive(Path::new("/opt/app/bin"))
            .expect_err("unsuffixed path must be rejected");
        assert!(matches!(
            err,
            LaunchError::MarkerMissing { ref self_path } if self_path == Path::new("/opt/app/bin")
        ));
    }

    #[test]
    fn derive_with_interior_marker_is_a_protocol_violation() {
        let err = WrapperInvocation::derive(Path::new("/opt/app.wrapper/bin"))
            .expect_err("marker must be anchored at the end");
        assert!(matches!(err, LaunchError::MarkerMissing { .. }));
    }

    #[test]
    fn derive_rejects_directory_target() {
        let err = WrapperInvocation::derive(Path::new("/opt/app/.wrapper"))
            .expect_err("stripping must not leave a directory path");
        assert!(matches!(
            err,
            LaunchError::InvalidTarget { ref target_path } if target_path == Path::new("/opt/app/")
        ));
    }

    #[test]
    fn derive_rejects_empty_target() {
        let err = WrapperInvocation::derive(Path::new(".wrapper"))
            .expect_err("bare marker leaves nothing to launch");
        assert!(matches!(err, LaunchError::InvalidTarget { .. }));
    }

    #[test]
    fn derive_strips_only_the_final_marker() {
        let invocation = WrapperInvocation::derive(Path::new("/opt/app/AppRun.wrapper.wrapper"))
            .expect("doubled suffix still ends with the marker");
        assert_eq!(
            invocation.target_path(),
            Path::new("/opt/app/AppRun.wrapper")
        );
    }

    #[test]
    fn derive_is_idempotent_for_the_same_input() {
        let first = WrapperInvocation::derive(Path::new("/opt/app/AppRun.wrapper"))
            .expect("path should derive");
        let second = WrapperInvocation::derive(Path::new("/opt/app/AppRun.wrapper"))
            .expect("path should derive again");
        assert_eq!(first, second);
    }
}
