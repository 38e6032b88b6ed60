pub mod style;
pub mod widgets;

pub use style::{StyleTokens, LAYOUT_TOKENS};
pub use widgets::{action_button, suppress_check_button};
