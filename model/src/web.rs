/// Reply envelopes shared between the friends backend API and the dashboard

use serde::{
    Deserialize,
    Serialize,
};

use crate::{FriendRequest, User};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplyStatus {
    pub status: u64,
    pub error: String,
    #[serde(default)]
    pub data: Option<ReplyData>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ReplyData {
    UserInfo(User),
    PendingRequests(Vec<FriendRequest>),
    Directory(Vec<User>),
}
