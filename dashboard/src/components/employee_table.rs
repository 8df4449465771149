//! Employee table

use directory_shared::ViewState;
use leptos::prelude::*;

use crate::host::PageDirectory;

#[component]
pub fn EmployeeTable(directory: PageDirectory, view_state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <div class="card">
            <table class="tblEmployee">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"First name"</th>
                        <th>"Last name"</th>
                        <th>"Job title"</th>
                        <th>"Annual salary"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || view_state.with(|state| state.table_rows()).into_iter().map(|row| {
                        let id = row.id;
                        let edit = directory.clone();
                        let delete = directory.clone();
                        view! {
                            <tr>
                                {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                <td>
                                    <button
                                        class="btn btn-link text-success"
                                        on:click=move |_| {
                                            let directory = edit.clone();
                                            leptos::task::spawn_local(async move {
                                                directory.prepare_edit(id).await;
                                            });
                                        }
                                    >
                                        "Update"
                                    </button>
                                    " | "
                                    <button
                                        class="btn btn-link text-danger"
                                        on:click=move |_| {
                                            let directory = delete.clone();
                                            leptos::task::spawn_local(async move {
                                                directory.delete_by_id(id).await;
                                            });
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
