use std::rc::Rc;

use yew::{
    prelude::*,
    function_component,
    html,
};
use yew_feather::{
    UserCheck,
    UserMinus,
};
use yew_toast::ToastContext;
use wasm_bindgen_futures::spawn_local;

use model::{
    FriendRequest,
    RequestId,
    User,
    UserId,
};

use crate::actions::{RowAction, row_actions, run_action};
use crate::components::avatar::*;
use crate::notify::{Notifier, notifier_for};
use crate::services::FriendsServiceContext;
use crate::store::{UserDirectory, UsersContext};


/// Pick the user to show for a request: the directory copy of the other
/// party if there is one, then whatever summary came with the request.
pub fn resolve_user(request: &FriendRequest, viewer: &UserId, directory: Option<&UserDirectory>) -> Option<User> {
    let other = request.other_user_id(viewer);

    directory.and_then(|d| d.get_user(other))
        .or_else(|| request.embedded_other(viewer))
        .cloned()
}

/// Row clicks only mean something once we know who the row is about
pub fn open_profile(user: Option<&User>, on_click_user: &Callback<UserId>) {
    if let Some(user) = user {
        on_click_user.emit(user.id.clone());
    }
}

fn action_icon(action: RowAction) -> Html {
    match action {
        RowAction::Accept => html! { <UserCheck size="18"/> },
        RowAction::Cancel => html! { <UserMinus size="18"/> },
    }
}

fn action_callback(
    action: RowAction,
    request_id: RequestId,
    service: Option<FriendsServiceContext>,
    notifier: Rc<dyn Notifier>,
) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        // Buttons sit inside the clickable row
        e.stop_propagation();

        let Some(service) = service.clone() else {
            log::error!("no FriendsService provided, dropping {:?} on request {}", action, request_id);
            return;
        };

        let notifier = notifier.clone();
        let request_id = request_id.clone();
        spawn_local(async move {
            run_action(service.service(), &*notifier, action, request_id).await;
        });
    })
}


#[derive(Properties, PartialEq)]
pub struct RequestRowProps {
    pub request: FriendRequest,
    pub current_user: User,
    pub on_click_user: Callback<UserId>,
}

#[function_component(RequestRow)]
pub fn request_row(props: &RequestRowProps) -> Html {
    let directory = use_context::<UsersContext>();
    let toasts = use_context::<ToastContext>();
    let service = use_context::<FriendsServiceContext>();

    let request = &props.request;
    let direction = request.direction(&props.current_user.id);
    let user = resolve_user(request, &props.current_user.id, directory.as_deref());

    let notifier = notifier_for(toasts);

    let onclick = {
        let user = user.clone();
        let on_click_user = props.on_click_user.clone();
        Callback::from(move |_| open_profile(user.as_ref(), &on_click_user))
    };
    let buttons = row_actions(direction).iter().map(|&action| {
        let onclick = action_callback(action, request.id.clone(), service.clone(), notifier.clone());
        html! {
            <button class={action.button_class()} title={action.title()} {onclick}>
                { action_icon(action) }
            </button>
        }
    });

    let (name, username) = user.as_ref()
        .map(|u| (u.name.clone(), u.username.clone()))
        .unwrap_or_default();

    html! {
        <div class="requestrow is-flex is-justify-content-space-between is-align-items-center px-2 py-3"
            data-request-id={request.id.clone()} {onclick}>
            <div class="is-flex is-align-items-center">
                <Avatar user={user} />
                <div class="is-flex is-flex-direction-column ml-3">
                    <span class="requestname has-text-weight-bold">{ name }</span>
                    <span class="requesthandle is-size-7 has-text-grey">{ username }</span>
                </div>
            </div>
            <div class="is-flex">
                { for buttons }
            </div>
        </div>
    }
}
