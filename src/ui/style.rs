/// Compile-time layout tokens, not user-overridable. Geometry mirrors the
/// classic wrapper dialog: a 480x286 window with two 180px action buttons
/// and a checkbox row underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub window_width: i32,
    pub window_height: i32,
    pub content_margin: i32,
    pub content_spacing: i32,
    pub action_spacing: i32,
    pub action_button_size: i32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    window_width: 480,
    window_height: 286,
    content_margin: 40,
    content_spacing: 20,
    action_spacing: 40,
    action_button_size: 180,
};
