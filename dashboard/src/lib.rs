//! ==============================================================================
//! lib.rs - Employee Directory Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the employee directory rest api.
//!     renders the employee table, the create/edit form, the search
//!     panel and transient notifications.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the directory api via fetch, relative to the page location
//!     - all page state lives in one `ViewState` signal
//!
//! ==============================================================================

use directory_shared::{ApiError, Directory, DirectoryConfig, ViewState};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod host;
mod logging;

use api::FetchTransport;
use components::{EmployeeForm, EmployeeTable, Header, NotificationArea, SearchPanel};
use host::{BrowserHost, PageDirectory};

/// used when the page location cannot be read
const FALLBACK_LOCATION: &str = "http://localhost:8080/";

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

fn page_config() -> Result<DirectoryConfig, ApiError> {
    let href = web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_else(|| FALLBACK_LOCATION.to_string());
    DirectoryConfig::from_location(&href)
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::default());
    let config = match page_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "cannot derive api base from page location");
            return view! {
                <Header />
                <div class="container">
                    <div class="alert alert-danger mt-2">{err.to_string()}</div>
                </div>
            }
            .into_any();
        }
    };
    tracing::info!(base_url = %config.base_url, "employee directory starting");

    let directory: PageDirectory =
        Directory::new(FetchTransport, BrowserHost { view: view_state }, &config);

    // initial list + roles
    let loader = directory.clone();
    Effect::new(move || {
        let directory = loader.clone();
        leptos::task::spawn_local(async move {
            directory.load().await;
        });
    });

    view! {
        <Title text="Employee Directory" />
        <Header />
        <div class="container">
            <NotificationArea view_state=view_state />
            <div id="employee-management">
                <EmployeeForm directory=directory.clone() view_state=view_state />
                <SearchPanel directory=directory.clone() view_state=view_state />
                <EmployeeTable directory=directory view_state=view_state />
            </div>
        </div>
    }
    .into_any()
}
