/// Message triple shown on the dialog. Selected once at startup from a
/// closed set of two variants; immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub launch_label: &'static str,
    pub menu_label: &'static str,
    pub checkbox_label: &'static str,
}

pub const ENGLISH: Messages = Messages {
    launch_label: "\nLaunch app\n\n",
    menu_label: "\nCreate menu entry\nand launch app",
    checkbox_label: " Don't show this message again",
};

pub const GERMAN: Messages = Messages {
    launch_label: "\nStarte App\n\n",
    menu_label: "\nMen\u{fc}eintrag erstellen\nund App starten",
    checkbox_label: " Dieses Fenster nicht erneut anzeigen",
};

/// Reads `LANG`, falling back to `LANGUAGE`, and picks the message set.
pub fn select_messages() -> Messages {
    let tag = std::env::var("LANG")
        .ok()
        .or_else(|| std::env::var("LANGUAGE").ok());
    select_from(tag.as_deref())
}

/// Only a `de` prefix substitutes the German triple; the POSIX default
/// locale and every other tag keep English.
pub fn select_from(tag: Option<&str>) -> Messages {
    let Some(tag) = tag else {
        return ENGLISH;
    };
    if tag == "C" {
        return ENGLISH;
    }
    if tag.starts_with("de") {
        return GERMAN;
    }
    ENGLISH
}
