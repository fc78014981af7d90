//! ヘッダー・ナビゲーションタブ

use crate::runtime::Controller;
use leptos::prelude::*;
use partnership_ai_common::Section;

#[component]
pub fn Header(controller: Controller, visible: Memo<Option<Section>>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Partnership AI"</h1>
            <p class="text-muted">"Tax clause analysis for partnership agreements"</p>
            <nav class="nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                href="#"
                                class="nav-link"
                                class:active=move || visible.get() == Some(section)
                                data-section=section.id()
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    controller.update(|c| c.switch_to_section(section.id()));
                                }
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
