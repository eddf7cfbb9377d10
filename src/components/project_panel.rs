//! Project estimate: parts list, labor input, sums, clear and export.

use leptos::prelude::*;

use crate::config::StorefrontConfig;
use crate::state::project::ProjectState;
use crate::util::notify::BrowserDialogs;

#[component]
pub fn ProjectPanel() -> impl IntoView {
    let config = expect_context::<StoredValue<StorefrontConfig>>();
    let project = expect_context::<RwSignal<ProjectState>>();

    let summary = Memo::new(move |_| project.with(|p| config.with_value(|c| p.render(&c.format))));
    let currency = config.with_value(|c| c.format.currency.clone());
    let total_currency = currency.clone();

    let on_labor = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        project.update(|p| p.set_labor_input(&raw));
    };
    let on_clear = move |_| {
        project.update(|p| {
            p.clear_project(&BrowserDialogs);
        });
    };
    let on_export = move |_| project.with_untracked(|p| p.export_estimate(&BrowserDialogs));

    view! {
        <div class="project">
            <ul id="project-items" class="project__items">
                {move || {
                    summary
                        .get()
                        .lines
                        .into_iter()
                        .map(|line| view! {
                            <li>
                                <span>{line.name}</span>
                                <span>{line.price}</span>
                            </li>
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <label class="project__labor">
                "Labor cost"
                <input
                    id="labor-input"
                    type="number"
                    min="0"
                    prop:value=move || project.with(|p| p.labor_input().to_owned())
                    on:input=on_labor
                />
            </label>
            <p class="project__sum">
                "Parts: " <span id="parts-sum">{move || summary.get().subtotal}</span> " " {currency}
            </p>
            <p class="project__sum project__sum--total">
                "Total: " <span id="total-sum">{move || summary.get().total}</span> " " {total_currency}
            </p>
            <div class="project__actions">
                <button id="clear-project" class="btn" on:click=on_clear>"Clear project"</button>
                <button id="export-estimate" class="btn" on:click=on_export>"Export estimate"</button>
            </div>
        </div>
    }
}
