//! browser side of the directory `Host` seam

use std::time::Duration;

use directory_shared::{Directory, Host, NotificationId, ViewState};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::api::FetchTransport;

/// the directory as wired into the page
pub type PageDirectory = Directory<FetchTransport, BrowserHost>;

/// view state signal plus the window's dialogs and timers
#[derive(Debug, Clone, Copy)]
pub struct BrowserHost {
    pub view: RwSignal<ViewState>,
}

impl Host for BrowserHost {
    fn update_view(&self, f: impl FnOnce(&mut ViewState)) {
        self.view.update(f);
    }

    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.view.with_untracked(f)
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn schedule_dismiss(&self, id: NotificationId, after: Duration) {
        let view = self.view;
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            // the page may be gone by the time the timer fires
            view.try_update(|state| state.dismiss(id));
        })
        .forget();
    }
}
