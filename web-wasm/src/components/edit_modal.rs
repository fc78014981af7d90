//! 抽出結果の編集ダイアログ

use crate::runtime::{self, Controller};
use leptos::prelude::*;
use partnership_ai_common::Confidence;

#[component]
pub fn EditModal(controller: Controller) -> impl IntoView {
    // 開いているカードが変わったときだけ描き直す
    let open = Memo::new(move |_| {
        controller.with(|c| c.editor().map(|d| (d.card_index, d.modal_title())))
    });
    let confidence = Memo::new(move |_| {
        controller.with(|c| c.editor().map(|d| d.confidence).unwrap_or_default())
    });

    let close = move || controller.update(|c| c.close_editor());

    move || {
        open.get().map(|(_, title)| {
            let content = controller.with_untracked(|c| {
                c.editor().map(|d| d.content.clone()).unwrap_or_default()
            });

            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h3 id="modalTitle">{title}</h3>
                            <button class="modal-close" on:click=move |_| close()>"×"</button>
                        </div>

                        <div class="form-group">
                            <label for="componentContent">"Content"</label>
                            <textarea
                                id="componentContent"
                                rows="6"
                                prop:value=content
                                on:input=move |ev| {
                                    let content = event_target_value(&ev);
                                    controller.update(|c| c.set_editor_content(content));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="confidenceScore">"Confidence"</label>
                            <input
                                type="range"
                                id="confidenceScore"
                                min="0"
                                max="100"
                                prop:value=move || confidence.get().value().to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<i64>() {
                                        controller.update(|c| {
                                            c.set_editor_confidence(Confidence::saturating(value))
                                        });
                                    }
                                }
                            />
                            <span class="range-value">{move || confidence.get().to_string()}</span>
                        </div>

                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| {
                                    runtime::track(
                                        controller,
                                        controller.try_update(|c| c.save_editor()).flatten(),
                                    );
                                }
                            >
                                "Save Changes"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
