//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never calls the Zellij API
//! itself. It returns a `Vec<Action>` which the plugin shim executes in order.

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts a one-shot timer; when it fires the toast is hidden.
    ScheduleToastDismiss {
        /// Delay before the toast disappears.
        seconds: f64,
    },
}
