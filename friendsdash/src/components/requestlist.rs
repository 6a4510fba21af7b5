use std::rc::Rc;

use yew::{
    prelude::*,
    function_component,
    html,
};

use model::{
    FriendRequest,
    User,
    UserId,
};

use crate::components::{profilemodal::*, requestrow::*};

pub const EMPTY_MESSAGE: &str = "There are no pending friend requests.";

pub fn header_text(count: usize) -> String {
    format!("Pending — {}", count)
}

/// The summary some row carried for `user_id`
pub fn embedded_summary(requests: &[FriendRequest], viewer: &UserId, user_id: &UserId) -> Option<User> {
    requests.iter()
        .filter_map(|r| r.embedded_other(viewer))
        .find(|u| &u.id == user_id)
        .cloned()
}

/// Whose profile panel is open, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSelection {
    pub user_id: Option<UserId>,
}

pub enum SelectionAction {
    Open(UserId),
    Dismiss,
}

impl Reducible for ProfileSelection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectionAction::Open(id) => Self { user_id: Some(id) },
            SelectionAction::Dismiss => Self { user_id: None },
        }.into()
    }
}

impl ProfileSelection {
    pub fn is_open(&self) -> bool {
        self.user_id.is_some()
    }
}


#[derive(Properties, PartialEq)]
pub struct PendingRequestsProps {
    pub requests: Vec<FriendRequest>,
    pub current_user: User,
}

#[function_component(PendingRequests)]
pub fn pending_requests(props: &PendingRequestsProps) -> Html {
    let selection = use_reducer(ProfileSelection::default);

    let on_click_user = {
        let selection = selection.dispatcher();
        Callback::from(move |id| selection.dispatch(SelectionAction::Open(id)))
    };

    let on_open_change = {
        let selection = selection.dispatcher();
        Callback::from(move |open: bool| {
            if !open {
                selection.dispatch(SelectionAction::Dismiss);
            }
        })
    };

    let summary = selection.user_id.as_ref()
        .and_then(|id| embedded_summary(&props.requests, &props.current_user.id, id));

    html! {
        <>
        <div class="pendingrequests">
            <div class="pendingheader mb-4 is-uppercase is-size-7 has-text-weight-semibold has-text-grey">
                { header_text(props.requests.len()) }
            </div>
            {
                if props.requests.is_empty() {
                    html! {
                        <div class="is-flex is-flex-direction-column is-justify-content-center is-align-items-center py-6">
                            <p class="is-size-7 has-text-grey">{ EMPTY_MESSAGE }</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                        {
                            for props.requests.iter().map(|req| {
                                html! {
                                    <RequestRow key={req.id.clone()} request={req.clone()}
                                        current_user={props.current_user.clone()}
                                        on_click_user={on_click_user.clone()} />
                                }
                            })
                        }
                        </>
                    }
                }
            }
        </div>
        <ProfileModal user_id={selection.user_id.clone()} open={selection.is_open()} {on_open_change} {summary} />
        </>
    }
}
