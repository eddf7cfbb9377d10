//! A single catalog card with an "add to project" button.

use leptos::prelude::*;

use crate::state::catalog::Card;

#[component]
pub fn PartCard(card: Card, price_label: String, on_add: Callback<Card>) -> impl IntoView {
    let name = card.name.clone();
    let data_name = card.name.clone();
    let kind = card.kind.clone();
    let price_attr = card.price.to_string();

    view! {
        <article class="part-card" data-name=data_name data-type=kind data-price=price_attr>
            <h3 class="part-card__name">{name}</h3>
            <span class="part-card__price">{price_label}</span>
            <button class="btn add-btn" on:click=move |_| on_add.run(card.clone())>
                "Add to project"
            </button>
        </article>
    }
}
