//! Search panel: find by id, by role title, by role id, or list all

use directory_shared::{ViewState, ROLE_ID_RANGE};
use leptos::prelude::*;

use crate::host::PageDirectory;

#[component]
pub fn SearchPanel(directory: PageDirectory, view_state: RwSignal<ViewState>) -> impl IntoView {
    let by_id = directory.clone();
    let find_by_id = move |_| {
        let directory = by_id.clone();
        leptos::task::spawn_local(async move { directory.find_by_id().await });
    };

    let by_title = directory.clone();
    let find_by_role_title = move |_| {
        let directory = by_title.clone();
        leptos::task::spawn_local(async move { directory.find_by_role_title().await });
    };

    let by_role_id = directory.clone();
    let find_by_role_id = move |_| {
        let directory = by_role_id.clone();
        leptos::task::spawn_local(async move { directory.find_by_role_id().await });
    };

    let list_all = move |_| {
        let directory = directory.clone();
        leptos::task::spawn_local(async move { directory.list_all().await });
    };

    view! {
        <div class="card">
            <h2>"Search"</h2>

            <div class="input-group">
                <input
                    type="text"
                    id="employee-id-find"
                    placeholder="Employee ID"
                    prop:value=move || view_state.with(|state| state.search.employee_id.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|state| state.search.employee_id = value);
                    }
                />
                <button id="employee-id-find-btn" on:click=find_by_id>"Find by ID"</button>
            </div>

            <div class="input-group">
                <select
                    id="employee-role-find"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|state| state.search.selected_role = value.parse().ok());
                    }
                >
                    <option value="" prop:selected=move || view_state.with(|state| state.search.selected_role.is_none())>
                        "Select a role"
                    </option>
                    {move || view_state.with(|state| state.role_options()).into_iter().map(|option| {
                        let value = option.value;
                        view! {
                            <option
                                value=value.to_string()
                                prop:selected=move || view_state.with(|state| state.search.selected_role == Some(value))
                            >
                                {option.label}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
                <button id="employee-role-find-btn" on:click=find_by_role_title>"Find by Role"</button>
            </div>

            <div class="input-group">
                <input
                    type="number"
                    id="employee-role-id-find"
                    min=ROLE_ID_RANGE.start().to_string()
                    max=ROLE_ID_RANGE.end().to_string()
                    placeholder="Role ID"
                    prop:value=move || view_state.with(|state| state.search.role_id.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|state| state.search.role_id = value);
                    }
                />
                <button id="employee-role-id-find-btn" on:click=find_by_role_id>"Find by Role ID"</button>
            </div>

            <button id="employee-all-btn" on:click=list_all>"List all"</button>
        </div>
    }
}
