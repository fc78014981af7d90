//! 設定パネルコンポーネント

use crate::runtime::{self, Controller};
use leptos::prelude::*;
use partnership_ai_common::settings::{NlpModel, ProcessingPriority, TaxSoftware};
use partnership_ai_common::{Confidence, SelectOption, Settings};

/// 名前付き選択肢のセレクトボックス
fn option_select<T>(
    controller: Controller,
    id: &'static str,
    label: &'static str,
    get: fn(&Settings) -> T,
    set: fn(&mut Settings, T),
) -> impl IntoView
where
    T: SelectOption + Send + Sync,
{
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || controller.with(|c| get(c.settings_draft()).label())
                on:change=move |ev| {
                    if let Some(value) = T::from_label(&event_target_value(&ev)) {
                        controller.update(|c| set(c.settings_draft_mut(), value));
                    }
                }
            >
                {T::OPTIONS
                    .iter()
                    .map(|option| {
                        let label = option.label();
                        view! { <option value=label>{label}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn SettingsPanel(controller: Controller) -> impl IntoView {
    let threshold = Memo::new(move |_| controller.with(|c| c.settings_draft().confidence_threshold));
    let connections = Memo::new(move |_| controller.with(|c| c.connections().to_vec()));

    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                {option_select::<NlpModel>(
                    controller,
                    "nlpModel",
                    "NLP Model",
                    |s| s.nlp_model,
                    |s, v| s.nlp_model = v,
                )}

                <div class="form-group">
                    <label for="confidenceThreshold">"Confidence Threshold"</label>
                    <input
                        type="range"
                        id="confidenceThreshold"
                        min="0"
                        max="100"
                        prop:value=move || threshold.get().value().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<i64>() {
                                controller.update(|c| {
                                    c.settings_draft_mut().confidence_threshold =
                                        Confidence::saturating(value);
                                });
                            }
                        }
                    />
                    <span class="range-value">{move || threshold.get().to_string()}</span>
                </div>

                {option_select::<TaxSoftware>(
                    controller,
                    "defaultTaxSoftware",
                    "Default Tax Software",
                    |s| s.default_tax_software,
                    |s, v| s.default_tax_software = v,
                )}

                {option_select::<ProcessingPriority>(
                    controller,
                    "processingPriority",
                    "Processing Priority",
                    |s| s.processing_priority,
                    |s, v| s.processing_priority = v,
                )}
            </div>

            <div class="settings-actions">
                <button
                    class="btn btn-tertiary"
                    on:click=move |_| {
                        runtime::track(controller, controller.try_update(|c| c.reset_settings()));
                    }
                >
                    "Reset to Defaults"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        runtime::track(controller, controller.try_update(|c| c.save_settings()));
                    }
                >
                    "Save Settings"
                </button>
            </div>

            <div class="card">
                <h3>"API Connections"</h3>
                <ul class="api-list">
                    {move || {
                        connections
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, api)| {
                                view! {
                                    <li class="api-item">
                                        <span class="api-name">{api.name.clone()}</span>
                                        <span class="api-status">{api.status_label()}</span>
                                        <button
                                            class="btn btn-secondary btn-small"
                                            on:click=move |_| runtime::press_api_button(controller, index)
                                        >
                                            {api.button_label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </div>
    }
}
