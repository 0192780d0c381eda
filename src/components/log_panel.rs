//! Log Panel
//!
//! Collapsible view of the rolling logger's buffer.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (refresh, set_refresh) = signal(0u32);

    let lines = move || {
        let _ = ctx.reload_trigger.get();
        let _ = refresh.get();
        ctx.recent_logs()
    };

    view! {
        <details class="log-panel">
            <summary>"Recent log"</summary>
            <button type="button" on:click=move |_| set_refresh.update(|v| *v += 1)>"Refresh"</button>
            <pre class="log-lines">{move || lines().join("\n")}</pre>
        </details>
    }
}
