use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// External desktop-menu registration, consumed through a narrow interface.
/// Implementations must be idempotent and must not overwrite entries the
/// user already customized.
pub trait MenuRegistrar {
    fn register(&self, appimage_path: &Path) -> io::Result<()>;
}

/// Registers through the AppImageLauncher CLI. The tool may be absent on the
/// host; that failure mode is handled by the caller like any other
/// registration failure.
pub struct SystemMenuRegistrar;

impl MenuRegistrar for SystemMenuRegistrar {
    fn register(&self, appimage_path: &Path) -> io::Result<()> {
        let output = Command::new("ail-cli")
            .arg("integrate")
            .arg(appimage_path)
            .output()?;
        if !output.status.success() {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr),
                "menu integration helper reported failure"
            );
            return Err(io::Error::other(format!(
                "ail-cli integrate exited with {}",
                output.status
            )));
        }
        Ok(())
    }
}

/// Best-effort side effect on the desktop environment: a missing `APPIMAGE`
/// variable or a failing registrar is logged and otherwise ignored, so the
/// payload launch is never blocked.
pub fn register_menu_entry(registrar: &dyn MenuRegistrar, appimage: Option<OsString>) {
    let Some(path) = appimage.filter(|value| !value.is_empty()) else {
        tracing::warn!(
            "APPIMAGE not found in environment; skipping menu integration. \
             Are you running this from an AppImage?"
        );
        return;
    };

    let path = PathBuf::from(path);
    match registrar.register(&path) {
        Ok(()) => {
            tracing::info!(appimage = %path.display(), "registered application in desktop menu");
        }
        Err(err) => {
            tracing::warn!(
                appimage = %path.display(),
                ?err,
                "desktop menu registration failed; launching anyway"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingRegistrar {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl RecordingRegistrar {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MenuRegistrar for RecordingRegistrar {
        fn register(&self, appimage_path: &Path) -> io::Result<()> {
            self.calls.borrow_mut().push(appimage_path.to_path_buf());
            Ok(())
        }
    }

    struct FailingRegistrar;

    impl MenuRegistrar for FailingRegistrar {
        fn register(&self, _appimage_path: &Path) -> io::Result<()> {
            Err(io::Error::other("registration service unavailable"))
        }
    }

    #[test]
    fn register_menu_entry_forwards_the_appimage_path() {
        let registrar = RecordingRegistrar::new();
        register_menu_entry(&registrar, Some(OsString::from("/tmp/App.AppImage")));
        assert_eq!(
            registrar.calls.borrow().as_slice(),
            [PathBuf::from("/tmp/App.AppImage")]
        );
    }

    #[test]
    fn register_menu_entry_skips_when_appimage_is_unset() {
        let registrar = RecordingRegistrar::new();
        register_menu_entry(&registrar, None);
        assert!(registrar.calls.borrow().is_empty());
    }

    #[test]
    fn register_menu_entry_skips_when_appimage_is_empty() {
        let registrar = RecordingRegistrar::new();
        register_menu_entry(&registrar, Some(OsString::new()));
        assert!(registrar.calls.borrow().is_empty());
    }

    #[test]
    fn register_menu_entry_swallows_registrar_failures() {
        register_menu_entry(&FailingRegistrar, Some(OsString::from("/tmp/App.AppImage")));
    }
}
