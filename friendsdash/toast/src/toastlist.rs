use super::*;

/// Live toasts keyed by id, each with its fading flag
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ToastList {
    pub toasts: BTreeMap<usize, (ToastType, bool)>,
    counter: usize,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut counter = self.counter;

        match action {
            ToastAction::Toast(t) => {
                counter += 1;
                toasts.insert(counter, (t, false));
            },
            ToastAction::Delete(tid) => {
                if toasts.remove(&tid).is_none() {
                    log::debug!("attempted to delete toast {} but it already vanished", tid);
                }
            },
            ToastAction::Fade(tid) => {
                if let Some(t) = toasts.get_mut(&tid) {
                    t.1 = true
                } else {
                    log::warn!("fade called on non-existing toast {}", tid);
                }
            }
        };

        Self {
            toasts,
            counter,
        }.into()
    }
}

impl ToastList {
    pub fn new() -> Self {
        Self::default()
    }
}
