//! Notification area above the directory panel

use directory_shared::ViewState;
use leptos::prelude::*;

#[component]
pub fn NotificationArea(view_state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div class="notifications">
            {move || view_state.with(|state| {
                state.notifications.iter().cloned().collect::<Vec<_>>()
            }).into_iter().map(|notification| {
                let id = notification.id;
                view! {
                    <div class=notification.severity.css_class() role="alert">
                        {notification.message}
                        <button
                            type="button"
                            class="close"
                            aria-label="Close"
                            on:click=move |_| {
                                view_state.update(|state| {
                                    state.dismiss(id);
                                });
                            }
                        >
                            "×"
                        </button>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
