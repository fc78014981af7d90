//! 処理ステージの進捗表示

use crate::runtime::Controller;
use leptos::prelude::*;

#[component]
pub fn ProgressBar(controller: Controller) -> impl IntoView {
    let headline = Memo::new(move |_| controller.with(|c| c.status_headline().to_string()));
    let progress = Memo::new(move |_| controller.with(|c| c.progress()));
    let stages = Memo::new(move |_| controller.with(|c| c.stages().to_vec()));

    view! {
        <div class="progress-container">
            <h3 class="processing-status">{move || headline.get()}</h3>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get() * 100.0)
                />
            </div>
            <ul class="stage-list">
                {move || {
                    stages
                        .get()
                        .into_iter()
                        .map(|stage| {
                            view! {
                                <li class=format!("processing-stage {}", stage.state.as_str())>
                                    {stage.name}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
