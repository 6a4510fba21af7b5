use serde::{
    Serialize,
    Deserialize,
};

pub mod web;

pub type UserId = String;
pub type RequestId = String;

/// Display summary of a user, as served by the user directory or embedded
/// into a request at fetch time.
#[derive(Clone, Serialize, Eq, PartialEq, Deserialize, Debug)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>, // url
}

/// A pending friendship request between two users.
///
/// `sender` and `receiver` are denormalized summaries the backend may attach
/// so the request can be displayed before the directory has synced.
#[derive(Clone, Serialize, Eq, PartialEq, Deserialize, Debug)]
pub struct FriendRequest {
    pub id: RequestId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub receiver: Option<User>,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RequestDirection {
    /// The viewer sent the request
    Outgoing,
    /// The viewer received the request
    Incoming,
}

impl FriendRequest {
    pub fn direction(&self, viewer: &UserId) -> RequestDirection {
        if &self.sender_id == viewer {
            RequestDirection::Outgoing
        } else {
            RequestDirection::Incoming
        }
    }

    /// Id of the party that is not the viewer
    pub fn other_user_id(&self, viewer: &UserId) -> &UserId {
        match self.direction(viewer) {
            RequestDirection::Outgoing => &self.receiver_id,
            RequestDirection::Incoming => &self.sender_id,
        }
    }

    /// Summary of the other party that was embedded with the request, if any
    pub fn embedded_other(&self, viewer: &UserId) -> Option<&User> {
        match self.direction(viewer) {
            RequestDirection::Outgoing => self.receiver.as_ref(),
            RequestDirection::Incoming => self.sender.as_ref(),
        }
    }

    pub fn involves(&self, user: &UserId) -> bool {
        &self.sender_id == user || &self.receiver_id == user
    }
}
