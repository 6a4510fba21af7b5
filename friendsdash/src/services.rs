use std::rc::Rc;

use async_trait::async_trait;
use dash_config::read_config;
use gloo_net::http::{Request, Response};
use thiserror::Error;

use model::{
    FriendRequest,
    RequestId,
    User,
    web::{
        ReplyData,
        ReplyStatus,
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("server rejected the request ({status}): {reason}")]
    Rejected { status: u16, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("server replied {status}: {reason}")]
    Status { status: u16, reason: String },
    #[error("server sent back something unexpected: {0}")]
    Garbage(String),
}

/// Backend operations on a pending friend request.
///
/// Either call may fail for any reason (network, auth, request already gone);
/// callers only care whether it succeeded.
#[async_trait(?Send)]
pub trait FriendsService {
    async fn accept_request(&self, request_id: RequestId) -> Result<(), ActionError>;
    async fn cancel_request(&self, request_id: RequestId) -> Result<(), ActionError>;
}

/// Context handle so rows can reach whichever service the app wired up
#[derive(Clone)]
pub struct FriendsServiceContext(Rc<dyn FriendsService>);

impl FriendsServiceContext {
    pub fn new(service: impl FriendsService + 'static) -> Self {
        Self(Rc::new(service))
    }

    pub fn service(&self) -> &dyn FriendsService {
        &*self.0
    }
}

impl PartialEq for FriendsServiceContext {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(Rc::as_ptr(&self.0) as *const (), Rc::as_ptr(&other.0) as *const ())
    }
}


pub struct HttpFriendsService {
    base_url: String,
}

async fn rejection_reason(resp: &Response) -> String {
    match resp.json::<ReplyStatus>().await {
        Ok(reply) => reply.error,
        Err(_) => resp.status_text(),
    }
}

impl HttpFriendsService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(read_config!(api.base_url))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn action_url(&self, request_id: &RequestId, verb: &str) -> String {
        self.url(&format!("friends/requests/{}/{}", urlencoding::encode(request_id), verb))
    }

    async fn post_action(&self, url: String) -> Result<(), ActionError> {
        let resp = Request::post(&url)
            .send().await
            .map_err(|e| ActionError::Transport(e.to_string()))?;

        if resp.ok() {
            return Ok(())
        }

        let status = resp.status();
        let reason = rejection_reason(&resp).await;
        log::debug!("POST {url} rejected with {status}: {reason}");

        Err(ActionError::Rejected { status, reason })
    }

    async fn fetch(&self, path: &str) -> Result<ReplyData, LoadError> {
        let url = self.url(path);
        let resp = Request::get(&url)
            .send().await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(LoadError::Status {
                status: resp.status(),
                reason: rejection_reason(&resp).await,
            })
        }

        let reply = resp.json::<ReplyStatus>().await
            .map_err(|e| LoadError::Garbage(e.to_string()))?;

        reply.data.ok_or_else(|| LoadError::Garbage(format!("empty reply from {url}")))
    }

    pub async fn fetch_current_user(&self) -> Result<User, LoadError> {
        match self.fetch("userinfo").await? {
            ReplyData::UserInfo(user) => Ok(user),
            other => Err(LoadError::Garbage(format!("expected user info, got {other:?}"))),
        }
    }

    pub async fn fetch_pending_requests(&self) -> Result<Vec<FriendRequest>, LoadError> {
        match self.fetch("friends/requests").await? {
            ReplyData::PendingRequests(requests) => Ok(requests),
            other => Err(LoadError::Garbage(format!("expected pending requests, got {other:?}"))),
        }
    }

    pub async fn fetch_directory(&self) -> Result<Vec<User>, LoadError> {
        match self.fetch("users").await? {
            ReplyData::Directory(users) => Ok(users),
            other => Err(LoadError::Garbage(format!("expected user directory, got {other:?}"))),
        }
    }
}

#[async_trait(?Send)]
impl FriendsService for HttpFriendsService {
    async fn accept_request(&self, request_id: RequestId) -> Result<(), ActionError> {
        self.post_action(self.action_url(&request_id, "accept")).await
    }

    async fn cancel_request(&self, request_id: RequestId) -> Result<(), ActionError> {
        self.post_action(self.action_url(&request_id, "cancel")).await
    }
}
