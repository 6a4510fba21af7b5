use std::rc::Rc;

use yew::UseReducerDispatcher;
use yew_toast::{
    ToastContext,
    ToastList,
    toast_error,
    toast_success,
};

/// Sink for short-lived outcome messages
pub trait Notifier {
    fn notify_success(&self, message: String);
    fn notify_error(&self, message: String);
}

impl Notifier for UseReducerDispatcher<ToastList> {
    fn notify_success(&self, message: String) {
        self.dispatch(toast_success!(message));
    }

    fn notify_error(&self, message: String) {
        self.dispatch(toast_error!(message));
    }
}

/// Fallback for when no toast tray is mounted
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, message: String) {
        log::info!("{message}");
    }

    fn notify_error(&self, message: String) {
        log::warn!("{message}");
    }
}

pub fn notifier_for(toasts: Option<ToastContext>) -> Rc<dyn Notifier> {
    match toasts {
        Some(toasts) => Rc::new(toasts.dispatcher()),
        None => Rc::new(LogNotifier),
    }
}
