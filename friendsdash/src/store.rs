use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use yew::{
    Callback,
    Reducible,
    UseReducerHandle,
};

use model::{
    FriendRequest,
    RequestId,
    User,
    UserId,
};

use crate::services::{ActionError, FriendsService};


/// Best-known user summaries, keyed by id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

pub enum DirectoryAction {
    /// Replace the whole cache with a fresh listing
    Sync(Vec<User>),
    Upsert(User),
}

impl Reducible for UserDirectory {
    type Action = DirectoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DirectoryAction::Sync(users) => Self::with_users(users),
            DirectoryAction::Upsert(user) => {
                let mut users = self.users.clone();
                users.insert(user.id.clone(), user);
                Self { users }
            },
        }.into()
    }
}

impl UserDirectory {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }

    pub fn get_user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.users.len()
    }
}

pub type UsersContext = UseReducerHandle<UserDirectory>;


/// Pending requests for the signed-in user, as last loaded from the backend
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestStore {
    viewer: Option<UserId>,
    pub requests: Vec<FriendRequest>,
}

pub enum StoreAction {
    Load { viewer: UserId, requests: Vec<FriendRequest> },
    /// The request was accepted or cancelled and is no longer pending
    Resolved(RequestId),
}

impl Reducible for RequestStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StoreAction::Load { viewer, requests } => {
                let total = requests.len();
                let requests: Vec<_> = requests.into_iter()
                    .filter(|r| r.involves(&viewer))
                    .collect();

                if requests.len() != total {
                    log::warn!("dropped {} pending requests not involving {}", total - requests.len(), viewer);
                }
                log::debug!("loaded {} pending requests", requests.len());

                Self {
                    viewer: Some(viewer),
                    requests,
                }
            },
            StoreAction::Resolved(id) => {
                let requests = self.requests.iter()
                    .filter(|r| r.id != id)
                    .cloned()
                    .collect();

                Self {
                    viewer: self.viewer.clone(),
                    requests,
                }
            },
        }.into()
    }
}


/// Forwards to another service, and reports each successfully resolved
/// request so the store can drop it
pub struct StoreSyncedService {
    inner: Rc<dyn FriendsService>,
    on_resolved: Callback<RequestId>,
}

impl StoreSyncedService {
    pub fn new(inner: Rc<dyn FriendsService>, on_resolved: Callback<RequestId>) -> Self {
        Self {
            inner,
            on_resolved,
        }
    }
}

#[async_trait(?Send)]
impl FriendsService for StoreSyncedService {
    async fn accept_request(&self, request_id: RequestId) -> Result<(), ActionError> {
        self.inner.accept_request(request_id.clone()).await?;
        self.on_resolved.emit(request_id);
        Ok(())
    }

    async fn cancel_request(&self, request_id: RequestId) -> Result<(), ActionError> {
        self.inner.cancel_request(request_id.clone()).await?;
        self.on_resolved.emit(request_id);
        Ok(())
    }
}
