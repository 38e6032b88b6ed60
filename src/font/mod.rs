use gtk4::Settings;

pub const FALLBACK_FAMILY: &str = "Helvetica";

const SLANT_TOKENS: &[&str] = &["Italic", "Oblique", "Roman"];
const WEIGHT_TOKENS: &[&str] = &["Bold", "Light", "Medium", "Demi-Bold", "Black"];

/// Queries the desktop interface font and reduces it to a family name.
/// Falls back silently to [`FALLBACK_FAMILY`] when no settings backend is
/// available; that is not an error for a dialog this small.
pub fn system_font_family() -> String {
    match Settings::default().and_then(|settings| settings.gtk_font_name()) {
        Some(descriptor) => normalize_family(descriptor.as_str()),
        None => {
            tracing::debug!("no gtk font descriptor available; using fallback family");
            FALLBACK_FAMILY.to_string()
        }
    }
}

/// Reduces a raw desktop font descriptor ("family words, optional weight,
/// optional slant, optional trailing size") to the family words alone,
/// dropping decorations greedily from the end. `Roman` counts as a slant
/// token even when it is really part of the family ("Times New Roman"
/// becomes "Times New"); longstanding quirk, kept as-is.
pub fn normalize_family(descriptor: &str) -> String {
    let mut tokens: Vec<&str> = descriptor.split(' ').collect();

    if tokens
        .last()
        .is_some_and(|token| token.parse::<u32>().is_ok())
    {
        tokens.pop();
    }
    if tokens.last().is_some_and(|token| SLANT_TOKENS.contains(token)) {
        tokens.pop();
    }
    if tokens.last().is_some_and(|token| WEIGHT_TOKENS.contains(token)) {
        tokens.pop();
    }

    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_family_drops_size_and_weight() {
        assert_eq!(normalize_family("Noto Sans Bold 10"), "Noto Sans");
        assert_eq!(normalize_family("Cantarell 11"), "Cantarell");
    }

    #[test]
    fn normalize_family_drops_slant_before_weight() {
        assert_eq!(normalize_family("DejaVu Sans Oblique 11"), "DejaVu Sans");
        assert_eq!(normalize_family("Noto Sans Bold Italic 10"), "Noto Sans");
    }

    #[test]
    fn normalize_family_keeps_plain_families_untouched() {
        assert_eq!(normalize_family("Arial"), "Arial");
        assert_eq!(normalize_family("Liberation Mono"), "Liberation Mono");
    }

    #[test]
    fn normalize_family_conflates_roman_as_a_slant_marker() {
        assert_eq!(normalize_family("Times New Roman"), "Times New");
    }

    #[test]
    fn normalize_family_treats_empty_descriptor_as_one_empty_token() {
        assert_eq!(normalize_family(""), "");
    }
}
