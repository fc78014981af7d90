//! ダッシュボード（構成比バー・最近の解析）

use crate::runtime::{self, Controller};
use leptos::prelude::*;
use partnership_ai_common::format::{format_bytes, format_date};
use partnership_ai_common::sample::{recent_analyses, STRUCTURE_BREAKDOWN, STRUCTURE_STAGGER_MS};
use partnership_ai_common::Section;

#[component]
pub fn Dashboard(controller: Controller) -> impl IntoView {
    let analyzed = Memo::new(move |_| controller.with(|c| c.state().analysis_results.len()));

    view! {
        <div class="dashboard">
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-value">{move || analyzed.get()}</span>
                    <span class="stat-label">"Documents analyzed this session"</span>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        controller.update(|c| c.switch_to_section(Section::Upload.id()));
                    }
                >
                    "New Analysis"
                </button>
            </div>

            <div class="card">
                <h3>"Partnership Structure Analysis"</h3>
                {STRUCTURE_BREAKDOWN
                    .into_iter()
                    .enumerate()
                    .map(|(k, (label, percent))| structure_bar(k as u32, label, percent))
                    .collect_view()}
            </div>

            <div class="card">
                <h3>"Recent Analyses"</h3>
                <ul class="recent-list">
                    {recent_analyses()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li class="recent-item">
                                    <span class="recent-name">{entry.file_name}</span>
                                    <span class="text-muted">
                                        {format!(
                                            "{} · {} · {} components",
                                            format_bytes(entry.size_bytes, 2),
                                            format_date(entry.analyzed_on),
                                            entry.components_found,
                                        )}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// k本目のバーは 500*k ms 後に伸びる
fn structure_bar(k: u32, label: &'static str, percent: u8) -> impl IntoView {
    let filled = RwSignal::new(false);
    runtime::after(STRUCTURE_STAGGER_MS * k, move || filled.set(true));

    view! {
        <div class="structure-row">
            <span class="structure-label">{label}</span>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || {
                        let width = if filled.get() { percent } else { 0 };
                        format!("width: {}%", width)
                    }
                />
            </div>
            <span class="structure-value">{format!("{}%", percent)}</span>
        </div>
    }
}
