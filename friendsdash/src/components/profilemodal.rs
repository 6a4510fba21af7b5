use yew::{
    prelude::*,
    function_component,
    html,
};

use model::{User, UserId};

use crate::components::avatar::*;
use crate::store::UsersContext;

#[derive(Properties, PartialEq)]
pub struct ProfileModalProps {
    pub user_id: Option<UserId>,
    pub open: bool,
    /// Emits `false` when the viewer asks to close the panel
    pub on_open_change: Callback<bool>,
    /// What the clicked row showed, for users the directory lacks
    #[prop_or_default]
    pub summary: Option<User>,
}

#[function_component(ProfileModal)]
pub fn profile_modal(props: &ProfileModalProps) -> Html {
    let directory = use_context::<UsersContext>();

    let user_id = match (&props.user_id, props.open) {
        (Some(id), true) => id.clone(),
        _ => return html! {},
    };

    let close = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_| on_open_change.emit(false))
    };

    let user = directory.as_deref()
        .and_then(|d| d.get_user(&user_id))
        .cloned()
        .or_else(|| props.summary.clone().filter(|u| u.id == user_id));

    html! {
        <div class="modal is-active profilemodal" data-user-id={user_id}>
            <div class="modal-background" onclick={close.clone()} />
            <div class="modal-card">
                <div class="modal-card-body is-flex is-flex-direction-column is-align-items-center">
                    <Avatar user={user.clone()} size={AvatarSize::Large} />
                    {
                        if let Some(user) = user {
                            html! {
                                <>
                                <p class="title is-4 mt-3">{ user.name }</p>
                                <p class="subtitle is-6 has-text-grey">{ user.username }</p>
                                </>
                            }
                        } else {
                            html! {<i class="mt-3">{"Profile not loaded yet"}</i>}
                        }
                    }
                </div>
            </div>
            <button class="modal-close" aria-label="close" onclick={close}/>
        </div>
    }
}
