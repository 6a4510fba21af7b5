use std::rc::Rc;

use futures_util::future::try_join3;
use yew::{
    prelude::*,
    function_component,
    html,
};
use yew_hooks::prelude::*;
use yew_toast::{
    ToastContext,
    ToastList,
    ToastTray,
    toast_error,
};

use dash_config::read_config;
use model::User;

use crate::components::*;
use crate::services::{FriendsService, FriendsServiceContext, HttpFriendsService};
use crate::store::{
    DirectoryAction,
    RequestStore,
    StoreAction,
    StoreSyncedService,
    UserDirectory,
    UsersContext,
};


#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_reducer(ToastList::new);
    let users = use_reducer(UserDirectory::default);
    let store = use_reducer(RequestStore::default);
    let current_user = use_state(|| None::<User>);

    let http = use_memo(|_| Rc::new(HttpFriendsService::from_config()), ());

    // Successful actions drop the request from the store, which re-renders the list
    let service = {
        let http = (*http).clone();
        let store = store.dispatcher();
        use_memo(move |_| {
            let inner: Rc<dyn FriendsService> = http;
            FriendsServiceContext::new(StoreSyncedService::new(
                inner,
                Callback::from(move |id| store.dispatch(StoreAction::Resolved(id))),
            ))
        }, ())
    };

    let load = {
        let http = (*http).clone();
        let users = users.dispatcher();
        let store = store.dispatcher();
        let current_user = current_user.clone();
        let toasts = toasts.dispatcher();

        use_async_with_options(async move {
            let loaded = try_join3(
                http.fetch_current_user(),
                http.fetch_pending_requests(),
                http.fetch_directory(),
            ).await;

            match loaded {
                Ok((me, requests, directory)) => {
                    users.dispatch(DirectoryAction::Sync(directory));
                    store.dispatch(StoreAction::Load { viewer: me.id.clone(), requests });
                    current_user.set(Some(me));
                    Ok(())
                },
                Err(e) => {
                    log::error!("failed to load friend requests: {e}");
                    toasts.dispatch(toast_error!("Could not load friend requests".into()));
                    Err(e)
                },
            }
        },
        UseAsyncOptions::enable_auto())
    };

    let body = match (&*current_user, load.loading) {
        (Some(me), _) => html! {
            <PendingRequests requests={store.requests.clone()} current_user={me.clone()} />
        },
        (None, true) => html! {
            <progress class="progress is-small is-primary" max="100"/>
        },
        (None, false) => html! {
            <i>{"Not logged in"}</i>
        },
    };

    html! {
        <ContextProvider<ToastContext> context={toasts}>
        <ContextProvider<UsersContext> context={users}>
        <ContextProvider<FriendsServiceContext> context={(*service).clone()}>
            <div class="container friendsdash p-4">
                { body }
            </div>
            <ToastTray lifetime_ms={read_config!(toast.lifetime_ms)} fade_ms={read_config!(toast.fade_ms)} />
        </ContextProvider<FriendsServiceContext>>
        </ContextProvider<UsersContext>>
        </ContextProvider<ToastContext>>
    }
}
