use model::{RequestDirection, RequestId};

use crate::notify::Notifier;
use crate::services::FriendsService;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Accept,
    /// Decline when received, withdraw when sent
    Cancel,
}

impl RowAction {
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Accept => "Request accepted",
            Self::Cancel => "Request cancelled",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Accept => "Failed to accept",
            Self::Cancel => "Failed to cancel",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Self::Accept => "button is-rounded accept-request has-text-success mr-2",
            Self::Cancel => "button is-rounded cancel-request has-text-danger",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Accept => "Accept request",
            Self::Cancel => "Remove request",
        }
    }
}

/// Buttons a row offers, in display order. Only the receiver can accept.
pub fn row_actions(direction: RequestDirection) -> &'static [RowAction] {
    match direction {
        RequestDirection::Incoming => &[RowAction::Accept, RowAction::Cancel],
        RequestDirection::Outgoing => &[RowAction::Cancel],
    }
}

/// Perform one action against the service and report how it went.
///
/// Failures never escape, they become an error notification.
pub async fn run_action(
    service: &dyn FriendsService,
    notifier: &dyn Notifier,
    action: RowAction,
    request_id: RequestId,
) {
    let result = match action {
        RowAction::Accept => service.accept_request(request_id.clone()).await,
        RowAction::Cancel => service.cancel_request(request_id.clone()).await,
    };

    match result {
        Ok(()) => {
            log::debug!("{:?} on request {} succeeded", action, request_id);
            notifier.notify_success(action.success_message().into());
        },
        Err(e) => {
            log::warn!("{:?} on request {} failed: {}", action, request_id, e);
            notifier.notify_error(action.failure_message().into());
        },
    }
}
