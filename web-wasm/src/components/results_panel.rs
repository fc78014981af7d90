//! セッション中の解析結果一覧

use crate::runtime::Controller;
use leptos::prelude::*;

#[component]
pub fn ResultsPanel(controller: Controller) -> impl IntoView {
    let results = Memo::new(move |_| {
        controller.with(|c| {
            c.state()
                .analysis_results
                .iter()
                .map(|(document, components)| (document.clone(), components.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="results-panel">
            <Show
                when=move || !results.with(|r| r.is_empty())
                fallback=|| view! {
                    <p class="text-muted">"No documents have been analyzed yet."</p>
                }
            >
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|(document, components)| {
                            view! {
                                <div class="card">
                                    <h3>{document}</h3>
                                    <table class="results-table">
                                        <thead>
                                            <tr>
                                                <th>"Component"</th>
                                                <th>"Confidence"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {components
                                                .into_iter()
                                                .map(|component| {
                                                    view! {
                                                        <tr>
                                                            <td>{component.title}</td>
                                                            <td>{component.confidence.to_string()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}
