use dioxus::prelude::*;
use lazy_static::lazy_static;
use log::info;
use reqwest::Client;

use crate::{
    card::CardLayout,
    client::components::DirectoryView,
    config::USERS_URL,
    data::{UserId, ViewState},
    loader::{load_users, settle, LoadGuard},
};

lazy_static! {
    static ref HTTP: Client = Client::new();
}

/// Loads the directory once per mount and owns its view state.
#[inline_props]
pub fn DirectoryPage(cx: Scope, layout: CardLayout) -> Element {
    let state = use_state(&cx, || ViewState::Idle);
    // Dropped with the component, which aborts a load still in flight.
    let guard = cx.use_hook(|_| LoadGuard::new());
    let load = guard.bind(load_users(&HTTP, USERS_URL));
    use_future(&cx, (), |_| {
        let state = state.clone();
        async move {
            let Some(load) = load else {
                return;
            };
            state.set(ViewState::Loading);
            if let Some(next) = settle(load.await) {
                state.set(next);
            }
        }
    });

    cx.render(rsx!(
        DirectoryView {
            state: state.get(),
            layout: *layout,
            on_follow: move |id: UserId| state.modify(|current| current.with_follow_toggled(id)),
            on_delete: move |id: UserId| {
                info!("Deleting user with ID: {id}");
                state.modify(|current| current.without_user(id));
            },
        }
    ))
}
