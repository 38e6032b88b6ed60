use std::cell::{Cell, RefCell};
use std::ffi::OsString;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, Orientation};

use crate::error::AppResult;
use crate::font;
use crate::integration::{self, MenuRegistrar, SystemMenuRegistrar};
use crate::launch::{
    self, LaunchError, LaunchResult, PayloadLauncher, ProcessImageLauncher, WrapperInvocation,
};
use crate::locale::{self, Messages};
use crate::state::{DialogEvent, DialogState, LaunchDecision, StateMachine};
use crate::ui::{action_button, suppress_check_button, LAYOUT_TOKENS};

mod runtime_css;
mod startup;

use self::runtime_css::install_base_font_css;
use self::startup::{gtk_launch_args, usage_text, StartupConfig};

const APP_ID: &str = "io.github.wraprun";

/// Per-run dialog context owned by the event-loop driver and handed to the
/// widget callbacks; replaces ambient process-wide state.
#[derive(Debug, Default)]
pub(crate) struct DialogContext {
    suppress_dialog: Cell<bool>,
}

impl DialogContext {
    /// The suppress-dialog preference is toggled by the checkbox but never
    /// persisted or read back by any launch path; deliberately inert until
    /// the intended behavior is clarified.
    fn set_suppress(&self, value: bool) {
        self.suppress_dialog.set(value);
    }
}

#[cfg(test)]
impl DialogContext {
    fn suppress_requested(&self) -> bool {
        self.suppress_dialog.get()
    }
}

pub struct App {
    machine: StateMachine,
}

impl App {
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new(),
        }
    }

    /// Runs the confirmation dialog until the window is closed. The launch
    /// actions do not come back here: they replace the process image or
    /// terminate it.
    pub fn start(&mut self) -> AppResult<i32> {
        let window_title = match StartupConfig::from_args() {
            StartupConfig::ShowUsage { program } => {
                print!("{}", usage_text(&program));
                return Ok(0);
            }
            StartupConfig::ShowDialog { window_title } => window_title,
        };

        let messages = locale::select_messages();
        tracing::info!(title = window_title.as_str(), "showing launch confirmation dialog");

        let shared_machine = Rc::new(RefCell::new(std::mem::take(&mut self.machine)));
        let machine_for_activate = shared_machine.clone();
        let activate_once = Rc::new(Cell::new(false));

        let application = Application::new(Some(APP_ID), gtk4::gio::ApplicationFlags::NON_UNIQUE);
        application.connect_activate(move |app| {
            if activate_once.replace(true) {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            }
            build_dialog(app, &window_title, messages, &machine_for_activate);
        });

        let status = application.run_with_args(&gtk_launch_args());

        self.machine = std::mem::take(&mut *shared_machine.borrow_mut());
        Ok(i32::from(status))
    }

    pub fn state(&self) -> &StateMachine {
        &self.machine
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn build_dialog(
    app: &Application,
    window_title: &str,
    messages: Messages,
    machine: &Rc<RefCell<StateMachine>>,
) {
    install_base_font_css(&font::system_font_family());

    let tokens = LAYOUT_TOKENS;
    let window = ApplicationWindow::new(app);
    window.add_css_class("wraprun-root");
    window.set_title(Some(window_title));
    window.set_default_size(tokens.window_width, tokens.window_height);
    window.set_resizable(false);

    let context = Rc::new(DialogContext::default());

    let launch_button = action_button(messages.launch_label, tokens.action_button_size);
    let menu_button = action_button(messages.menu_label, tokens.action_button_size);
    let suppress_check = suppress_check_button(messages.checkbox_label);

    let actions = GtkBox::new(Orientation::Horizontal, tokens.action_spacing);
    actions.append(&launch_button);
    actions.append(&menu_button);

    let content = GtkBox::new(Orientation::Vertical, tokens.content_spacing);
    content.set_margin_top(tokens.content_margin);
    content.set_margin_bottom(tokens.content_margin);
    content.set_margin_start(tokens.content_margin);
    content.set_margin_end(tokens.content_margin);
    content.append(&actions);
    content.append(&suppress_check);
    window.set_child(Some(&content));

    {
        let machine = machine.clone();
        let window = window.clone();
        launch_button.connect_clicked(move |_| {
            handle_dialog_event(&machine, &window, DialogEvent::Launch);
        });
    }
    {
        let machine = machine.clone();
        let window = window.clone();
        menu_button.connect_clicked(move |_| {
            handle_dialog_event(&machine, &window, DialogEvent::CreateMenuEntry);
        });
    }
    {
        let machine = machine.clone();
        let context = context.clone();
        suppress_check.connect_toggled(move |check| {
            if let Err(err) = machine.borrow_mut().transition(DialogEvent::ToggleSuppress) {
                tracing::warn!(?err, "suppress toggle arrived in unexpected state");
                return;
            }
            context.set_suppress(check.is_active());
            tracing::debug!(active = check.is_active(), "suppress-dialog preference toggled");
        });
    }
    {
        let machine = machine.clone();
        window.connect_close_request(move |_| {
            if let Err(err) = machine.borrow_mut().transition(DialogEvent::Close) {
                tracing::warn!(?err, "close requested in unexpected state");
            }
            glib::Propagation::Proceed
        });
    }

    window.present();
}

fn handle_dialog_event(
    machine: &Rc<RefCell<StateMachine>>,
    window: &ApplicationWindow,
    event: DialogEvent,
) {
    let next = match machine.borrow_mut().transition(event) {
        Ok(next) => next,
        Err(err) => {
            tracing::warn!(?err, "ignoring dialog event");
            return;
        }
    };

    match next.decision() {
        Some(decision) => terminal_launch(decision, window),
        None => {
            if next == DialogState::Closed {
                window.close();
            }
        }
    }
}

/// Both user-facing flows end here: on success the payload replaces the
/// process image, on failure the broken packaging invariant is reported and
/// the process exits with a non-zero status.
fn terminal_launch(decision: LaunchDecision, window: &ApplicationWindow) -> ! {
    window.set_visible(false);

    let err = execute_decision(decision, &SystemMenuRegistrar, &ProcessImageLauncher);
    tracing::error!(%err, "failed to hand off to payload");
    std::process::exit(1);
}

/// Runs one launch decision to its end. Only ever returns a fatal error;
/// registration failures are absorbed before the handoff.
pub(crate) fn execute_decision(
    decision: LaunchDecision,
    registrar: &dyn MenuRegistrar,
    launcher: &dyn PayloadLauncher,
) -> LaunchError {
    execute_decision_with(
        decision,
        registrar,
        launcher,
        std::env::var_os("APPIMAGE"),
        launch::resolve_invocation,
    )
}

fn execute_decision_with<R>(
    decision: LaunchDecision,
    registrar: &dyn MenuRegistrar,
    launcher: &dyn PayloadLauncher,
    appimage: Option<OsString>,
    resolve: R,
) -> LaunchError
where
    R: FnOnce() -> LaunchResult<WrapperInvocation>,
{
    if decision == LaunchDecision::LaunchWithMenuEntry {
        integration::register_menu_entry(registrar, appimage);
    }

    let invocation = match resolve() {
        Ok(invocation) => invocation,
        Err(err) => return err,
    };

    match launcher.launch(&invocation) {
        Ok(never) => match never {},
        Err(err) => err,
    }
}
