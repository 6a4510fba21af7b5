use yew::{
    prelude::*,
    html
};

use gloo_timers::callback::Timeout;
use yew_hooks::use_is_first_mount;

use super::*;


#[derive(Properties, PartialEq)]
pub struct ToastProps {
    message: ToastType,
    fading: bool,
    tid: usize,
    lifetime_ms: u32,
    fade_ms: u32,
    dispatch: UseReducerDispatcher<ToastList>,
}

#[function_component(ToastPopup)]
pub fn toast_popup(props: &ToastProps) -> Html {
    let onclick = {
        let tid = props.tid;
        let dispatch = props.dispatch.clone();
        Callback::from(move |_| dispatch.dispatch(ToastAction::Delete(tid)))
    };

    if use_is_first_mount() {
        let tid = props.tid;
        let fade_ms = props.fade_ms;

        let dispatch = props.dispatch.clone();
        Timeout::new(props.lifetime_ms, move || {
            dispatch.dispatch(ToastAction::Fade(tid));
            Timeout::new(fade_ms, move || {
                dispatch.dispatch(ToastAction::Delete(tid));
            }).forget();
        }).forget();
    }

    let class = {
        let fade = if props.fading {
            "toastclosing"
        } else { "" };

        format!("notification toast {} {} mb-4", fade, props.message.flavor())
    };

    html! {
        <div {class}>
            <div class="delete" {onclick}/>
            { props.message.text().to_string() }
        </div>
    }
}


#[derive(Properties, PartialEq)]
pub struct ToastTrayProps {
    /// How long a toast stays before it starts fading
    #[prop_or(5_000)]
    pub lifetime_ms: u32,
    #[prop_or(300)]
    pub fade_ms: u32,
}

#[function_component(ToastTray)]
pub fn toast_tray(props: &ToastTrayProps) -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        log::error!("ToastTray rendered without a ToastContext provider");
        return html! {};
    };

    html! {
        <div class="toasttray">
            {
                for toasts.toasts.iter().rev()
                .map(|(tid, (message, fading))| {
                    let dispatch = toasts.dispatcher();
                    let message = message.clone();
                    let fading = *fading;
                    let tid = *tid;
                    html! {
                        <ToastPopup key={tid} {message} {fading} {tid}
                            lifetime_ms={props.lifetime_ms} fade_ms={props.fade_ms} {dispatch} />
                    }})
            }
        </div>
    }
}
