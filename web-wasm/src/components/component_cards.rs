//! 抽出結果カード

use crate::runtime::Controller;
use leptos::prelude::*;

#[component]
pub fn ComponentCards(controller: Controller) -> impl IntoView {
    let cards = Memo::new(move |_| controller.with(|c| c.cards().to_vec()));

    view! {
        <div class="component-grid">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, card)| {
                        view! {
                            <div class="component-card">
                                <div class="component-header">
                                    <h4>{card.title}</h4>
                                    <span class="component-confidence">{card.confidence_label}</span>
                                </div>
                                <div class="component-content" inner_html=card.content_html />
                                <button
                                    class="btn btn-secondary btn-small"
                                    on:click=move |_| {
                                        controller.update(|c| {
                                            c.open_editor(i);
                                        });
                                    }
                                >
                                    "Edit"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
