//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Employee Directory"</h1>
                <p class="subtitle">"Create, find, update and delete employees"</p>
            </div>
        </header>
    }
}
