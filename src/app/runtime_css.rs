use gtk4::CssProvider;

/// Applies the normalized system font family as the dialog's base font.
pub(super) fn install_base_font_css(family: &str) {
    if family.is_empty() {
        return;
    }

    let css = format!("window.wraprun-root {{ font-family: \"{family}\"; }}");
    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
