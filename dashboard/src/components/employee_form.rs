//! Create / edit form

use directory_shared::ViewState;
use leptos::prelude::*;

use crate::host::PageDirectory;

#[component]
pub fn EmployeeForm(directory: PageDirectory, view_state: RwSignal<ViewState>) -> impl IntoView {
    let submit_directory = directory.clone();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let directory = submit_directory.clone();
        leptos::task::spawn_local(async move {
            directory.submit_form().await;
        });
    };

    let clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        directory.reset_form();
    };

    view! {
        <div class="card">
            <h2>"Employee"</h2>
            <form id="employee-form" on:submit=submit>
                <input
                    type="text"
                    class="employee-id"
                    placeholder="New employee"
                    readonly=true
                    prop:value=move || view_state.with(|state| state.form.id.clone())
                />
                <input
                    type="text"
                    class="employee-firstName"
                    placeholder="First name"
                    prop:value=move || view_state.with(|state| state.form.first_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|state| state.form.first_name = value);
                    }
                />
                <input
                    type="text"
                    class="employee-lastName"
                    placeholder="Last name"
                    prop:value=move || view_state.with(|state| state.form.last_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|state| state.form.last_name = value);
                    }
                />
                <select
                    id="employee-role"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|state| state.form.role_id = value.parse().ok());
                    }
                >
                    <option value="" prop:selected=move || view_state.with(|state| state.form.role_id.is_none())>
                        "Select a role"
                    </option>
                    {move || view_state.with(|state| state.role_options()).into_iter().map(|option| {
                        let value = option.value;
                        view! {
                            <option
                                value=value.to_string()
                                prop:selected=move || view_state.with(|state| state.form.role_id == Some(value))
                            >
                                {option.label}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
                <div class="input-group">
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=clear>"Clear"</button>
                </div>
            </form>
        </div>
    }
}
