use async_trait::async_trait;
use yew::{
    prelude::*,
    ServerRenderer,
};
use yew_toast::{ToastContext, ToastList};

use friendsdash::components::*;
use friendsdash::services::{ActionError, FriendsService, FriendsServiceContext};
use friendsdash::store::{UserDirectory, UsersContext};
use model::{FriendRequest, RequestId, User};

/// Never reached, rendering alone does not fire actions
struct Offline;

#[async_trait(?Send)]
impl FriendsService for Offline {
    async fn accept_request(&self, _: RequestId) -> Result<(), ActionError> {
        Err(ActionError::Transport("offline".into()))
    }

    async fn cancel_request(&self, _: RequestId) -> Result<(), ActionError> {
        Err(ActionError::Transport("offline".into()))
    }
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    requests: Vec<FriendRequest>,
    current_user: User,
    directory: Vec<User>,
    #[prop_or_default]
    profile: Option<String>,
    #[prop_or_default]
    profile_summary: Option<User>,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let toasts = use_reducer(ToastList::new);
    let users = {
        let directory = props.directory.clone();
        use_reducer(move || UserDirectory::with_users(directory))
    };
    let service = use_memo(|_| FriendsServiceContext::new(Offline), ());

    html! {
        <ContextProvider<ToastContext> context={toasts}>
        <ContextProvider<UsersContext> context={users}>
        <ContextProvider<FriendsServiceContext> context={(*service).clone()}>
            {
                if props.profile.is_some() {
                    html! {
                        <ProfileModal user_id={props.profile.clone()} open={true} on_open_change={Callback::noop()}
                            summary={props.profile_summary.clone()} />
                    }
                } else {
                    html! {
                        <PendingRequests requests={props.requests.clone()} current_user={props.current_user.clone()} />
                    }
                }
            }
        </ContextProvider<FriendsServiceContext>>
        </ContextProvider<UsersContext>>
        </ContextProvider<ToastContext>>
    }
}

fn user(id: &str, name: &str) -> User {
    User {
        id: id.into(),
        name: name.into(),
        username: format!("@{id}"),
        avatar: None,
    }
}

fn request(id: &str, sender: &str, receiver: &str) -> FriendRequest {
    FriendRequest {
        id: id.into(),
        sender_id: sender.into(),
        receiver_id: receiver.into(),
        sender: None,
        receiver: None,
    }
}

async fn render(requests: Vec<FriendRequest>, directory: Vec<User>) -> String {
    ServerRenderer::<Harness>::with_props(move || HarnessProps {
        requests,
        current_user: user("me", "Me"),
        directory,
        profile: None,
        profile_summary: None,
    }).render().await
}

/// The opening tag of the one button carrying `class`
fn button_tag<'a>(html: &'a str, class: &str) -> &'a str {
    let at = html.find(class).unwrap_or_else(|| panic!("no {class} button in {html}"));
    let start = html[..at].rfind("<button").expect("class outside a button");
    let end = at + html[at..].find('>').expect("unterminated tag");
    &html[start..=end]
}

#[tokio::test]
async fn empty_list_shows_the_empty_state() {
    let html = render(vec![], vec![]).await;

    assert!(html.contains("Pending — 0"));
    assert!(html.contains(EMPTY_MESSAGE));
    assert_eq!(html.matches("data-request-id=").count(), 0);
}

#[tokio::test]
async fn one_row_per_request_in_order() {
    let html = render(
        vec![
            request("r1", "alice", "me"),
            request("r2", "me", "bob"),
            request("r3", "carol", "me"),
        ],
        vec![],
    ).await;

    assert!(html.contains("Pending — 3"));
    assert!(!html.contains(EMPTY_MESSAGE));
    assert_eq!(html.matches("data-request-id=").count(), 3);

    let positions: Vec<_> = ["r1", "r2", "r3"].iter()
        .map(|id| {
            let attr = format!("data-request-id=\"{id}\"");
            assert_eq!(html.matches(&attr).count(), 1, "{id} should render exactly once");
            html.find(&attr).unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn outgoing_requests_only_offer_cancel() {
    let html = render(vec![request("r1", "me", "bob")], vec![]).await;

    assert_eq!(html.matches("accept-request").count(), 0);
    assert_eq!(html.matches("cancel-request").count(), 1);
}

#[tokio::test]
async fn incoming_requests_offer_both_actions() {
    let html = render(vec![request("r1", "alice", "me")], vec![]).await;

    assert_eq!(html.matches("accept-request").count(), 1);
    assert_eq!(html.matches("cancel-request").count(), 1);
}

#[tokio::test]
async fn each_button_is_labelled_for_its_action() {
    let html = render(vec![request("r1", "alice", "me")], vec![]).await;

    let accept = button_tag(&html, "accept-request");
    assert!(accept.contains("title=\"Accept request\""), "{accept}");
    assert!(accept.contains("has-text-success"), "{accept}");

    let cancel = button_tag(&html, "cancel-request");
    assert!(cancel.contains("title=\"Remove request\""), "{cancel}");
    assert!(cancel.contains("has-text-danger"), "{cancel}");

    // Accept comes first
    assert!(html.find("accept-request") < html.find("cancel-request"));
}

#[tokio::test]
async fn directory_copy_is_displayed_over_embedded_summary() {
    let mut req = request("r1", "alice", "me");
    req.sender = Some(user("alice", "Alice (stale)"));

    let html = render(vec![req], vec![user("alice", "Alice Fresh")]).await;

    assert!(html.contains("Alice Fresh"));
    assert!(!html.contains("Alice (stale)"));
}

#[tokio::test]
async fn embedded_summary_is_used_when_directory_misses() {
    let mut req = request("r1", "me", "bob");
    req.receiver = Some(user("bob", "Bob Embedded"));

    let html = render(vec![req], vec![user("carol", "Carol")]).await;

    assert!(html.contains("Bob Embedded"));
    assert!(html.contains("@bob"));
}

#[tokio::test]
async fn unresolved_rows_still_render() {
    let html = render(vec![request("r1", "ghost", "me")], vec![]).await;

    assert_eq!(html.matches("data-request-id=").count(), 1);
    assert!(html.contains("avatar-placeholder"));
}

#[tokio::test]
async fn profile_panel_is_closed_by_default() {
    let html = render(vec![request("r1", "alice", "me")], vec![user("alice", "Alice")]).await;

    assert!(!html.contains("modal-background"));
}

#[tokio::test]
async fn open_profile_panel_shows_the_directory_user() {
    let html = ServerRenderer::<Harness>::with_props(|| HarnessProps {
        requests: vec![],
        current_user: user("me", "Me"),
        directory: vec![user("alice", "Alice Fresh")],
        profile: Some("alice".into()),
        profile_summary: Some(user("alice", "Alice (stale)")),
    }).render().await;

    assert!(html.contains("modal-background"));
    assert!(html.contains("data-user-id=\"alice\""));
    assert!(html.contains("Alice Fresh"));
    assert!(!html.contains("Alice (stale)"));
}

#[tokio::test]
async fn open_profile_panel_falls_back_to_the_row_summary() {
    let html = ServerRenderer::<Harness>::with_props(|| HarnessProps {
        requests: vec![],
        current_user: user("me", "Me"),
        directory: vec![user("carol", "Carol")],
        profile: Some("bob".into()),
        profile_summary: Some(user("bob", "Bob Embedded")),
    }).render().await;

    assert!(html.contains("data-user-id=\"bob\""));
    assert!(html.contains("Bob Embedded"));
    assert!(!html.contains("Profile not loaded yet"));
}

#[tokio::test]
async fn open_profile_panel_without_any_copy_says_so() {
    let html = ServerRenderer::<Harness>::with_props(|| HarnessProps {
        requests: vec![],
        current_user: user("me", "Me"),
        directory: vec![],
        profile: Some("ghost".into()),
        profile_summary: None,
    }).render().await;

    assert!(html.contains("Profile not loaded yet"));
    assert!(html.contains("avatar-placeholder"));
}
