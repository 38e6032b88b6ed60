use gtk4::prelude::*;
use gtk4::{Align, Button, CheckButton, Justification, Label};

pub fn action_button(label: &str, size: i32) -> Button {
    let button = Button::with_label(label);
    button.set_focus_on_click(false);
    button.set_size_request(size, size);
    if let Some(child) = button.child().and_then(|child| child.downcast::<Label>().ok()) {
        child.set_justify(Justification::Center);
    }
    button
}

pub fn suppress_check_button(label: &str) -> CheckButton {
    let check = CheckButton::with_label(label);
    check.set_focus_on_click(false);
    check.set_halign(Align::Start);
    check
}
