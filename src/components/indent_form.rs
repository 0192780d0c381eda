//! Indent Form Component
//!
//! Purchase-request rows that can be added and removed. Submitting only
//! shows a summary; nothing is stored.

use asset_core::indent::{IndentForm, IndentRow};
use chrono::NaiveDate;
use leptos::prelude::*;

use crate::browser::{console, dialog};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn IndentFormView() -> impl IntoView {
    let form = RwSignal::new(IndentForm::with_blank_row());
    let (department, set_department) = signal(String::new());
    let (date, set_date) = signal(today().format(DATE_FORMAT).to_string());

    let submit_indent = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let date_value = NaiveDate::parse_from_str(&date.get(), DATE_FORMAT).unwrap_or_else(|_| today());
        let department_value = department.get();
        let Some(request) = form.try_update(|f| f.submit(department_value, date_value)) else {
            return;
        };

        log::info!("[INDENT] Submitted {} rows", request.rows.len());
        match serde_wasm_bindgen::to_value(&request) {
            Ok(value) => console::log_value("[INDENT] request", &value),
            Err(e) => log::warn!("[INDENT] Could not convert request: {}", e),
        }
        dialog::alert(&request.summary());

        set_department.set(String::new());
        set_date.set(today().format(DATE_FORMAT).to_string());
    };

    view! {
        <form class="indent-form" on:submit=submit_indent>
            <h2>"Indent"</h2>
            <div class="indent-meta">
                <input
                    type="text"
                    placeholder="Department"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </div>
            <table class="indent-table">
                <tr>
                    <th>"S.No"</th>
                    <th>"Particulars"</th>
                    <th>"Ordered By"</th>
                    <th></th>
                </tr>
                // Keyed by position: values are read back through the index
                <For
                    each=move || 0..form.with(|f| f.rows().len())
                    key=|index| *index
                    children=move |index| {
                        let field = move |pick: fn(&IndentRow) -> String| {
                            move || form.with(|f| f.rows().get(index).map(pick).unwrap_or_default())
                        };
                        view! {
                            <tr>
                                <td>{field(|r| r.serial.to_string())}</td>
                                <td>
                                    <input
                                        type="text"
                                        prop:value=field(|r| r.particulars.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set_particulars(index, value));
                                        }
                                    />
                                </td>
                                <td>
                                    <input
                                        type="text"
                                        prop:value=field(|r| r.ordered_by.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set_ordered_by(index, value));
                                        }
                                    />
                                </td>
                                <td>
                                    <button
                                        type="button"
                                        class="remove-row-btn"
                                        on:click=move |_| form.update(|f| f.remove_row(index))
                                    >
                                        "Remove"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </table>
            <Show when=move || form.with(|f| f.is_empty())>
                <p class="indent-empty">"No rows. Use \"Add Row\" to start an indent."</p>
            </Show>
            <div class="indent-actions">
                <button type="button" on:click=move |_| form.update(|f| f.add_row())>"Add Row"</button>
                <button type="submit" prop:disabled=move || form.with(|f| f.is_empty())>"Submit Indent"</button>
            </div>
        </form>
    }
}
