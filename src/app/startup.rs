pub(crate) const DEFAULT_WINDOW_TITLE: &str = "AppImage";

/// What the binary should do, decided from argv before GTK sees anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StartupConfig {
    ShowDialog { window_title: String },
    ShowUsage { program: String },
}

impl StartupConfig {
    pub(crate) fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::from_arg_list(&args)
    }

    fn from_arg_list(args: &[String]) -> Self {
        let program = args
            .first()
            .cloned()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        match args.get(1).map(String::as_str) {
            Some("--help") => Self::ShowUsage { program },
            Some(title) => Self::ShowDialog {
                window_title: title.to_string(),
            },
            None => Self::ShowDialog {
                window_title: DEFAULT_WINDOW_TITLE.to_string(),
            },
        }
    }
}

/// Usage text, including the toolkit attribution line expected in help
/// output.
pub(crate) fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} WINDOWTITLE\n\n\
         \n\nThis program is using GTK v{}.{}.{} (https://www.gtk.org)\n",
        gtk4::major_version(),
        gtk4::minor_version(),
        gtk4::micro_version(),
    )
}

/// Pass only argv[0] to GTK so the window-title argument does not fail GTK
/// argument parsing.
pub(crate) fn gtk_launch_args() -> Vec<String> {
    std::env::args().take(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn from_arg_list_without_arguments_uses_the_default_title() {
        assert_eq!(
            StartupConfig::from_arg_list(&args(&["wraprun"])),
            StartupConfig::ShowDialog {
                window_title: DEFAULT_WINDOW_TITLE.to_string()
            }
        );
    }

    #[test]
    fn from_arg_list_takes_the_first_argument_as_window_title() {
        assert_eq!(
            StartupConfig::from_arg_list(&args(&["wraprun", "My App", "ignored"])),
            StartupConfig::ShowDialog {
                window_title: "My App".to_string()
            }
        );
    }

    #[test]
    fn from_arg_list_help_requests_usage() {
        assert_eq!(
            StartupConfig::from_arg_list(&args(&["wraprun", "--help"])),
            StartupConfig::ShowUsage {
                program: "wraprun".to_string()
            }
        );
    }

    #[test]
    fn usage_text_names_the_program_and_the_toolkit() {
        let text = usage_text("wraprun");
        assert!(text.starts_with("Usage: wraprun WINDOWTITLE"));
        assert!(text.contains("GTK v"));
    }
}
