//! Doubles and fixtures shared by the unit tests

use async_trait::async_trait;
use mockall::mock;

use model::{FriendRequest, RequestId, User};

use crate::notify::Notifier;
use crate::services::{ActionError, FriendsService};

mock! {
    pub Friends {}

    #[async_trait(?Send)]
    impl FriendsService for Friends {
        async fn accept_request(&self, request_id: RequestId) -> Result<(), ActionError>;
        async fn cancel_request(&self, request_id: RequestId) -> Result<(), ActionError>;
    }
}

mock! {
    pub Toasts {}

    impl Notifier for Toasts {
        fn notify_success(&self, message: String);
        fn notify_error(&self, message: String);
    }
}

pub fn user(id: &str) -> User {
    User {
        id: id.into(),
        name: format!("{id} (directory)"),
        username: format!("@{id}"),
        avatar: None,
    }
}

pub fn request(id: &str, sender: &str, receiver: &str) -> FriendRequest {
    FriendRequest {
        id: id.into(),
        sender_id: sender.into(),
        receiver_id: receiver.into(),
        sender: None,
        receiver: None,
    }
}
