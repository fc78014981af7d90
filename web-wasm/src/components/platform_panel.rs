//! 税務ソフト連携パネル

use crate::download;
use crate::runtime::{self, Controller};
use leptos::prelude::*;
use partnership_ai_common::{NotificationKind, Platform, PlatformAction};

#[component]
pub fn PlatformPanel(controller: Controller) -> impl IntoView {
    let on_export = move |_| {
        let Some(export) = controller.try_update(|c| c.export_configuration()) else {
            return;
        };
        match download::download_text(export.body, export.file_name, export.mime_type) {
            Ok(()) => runtime::track(controller, Some(export.notification)),
            Err(e) => {
                log::error!("{}", e);
                runtime::notify(controller, "Export failed", NotificationKind::Error);
            }
        }
    };

    view! {
        <div class="platform-panel">
            <div class="platform-grid">
                {Platform::ALL
                    .into_iter()
                    .map(|platform| {
                        view! {
                            <div class="platform-card" data-platform=platform.id()>
                                <h4>{platform.display_name()}</h4>
                                <button
                                    class="btn btn-primary btn-small"
                                    on:click=move |_| {
                                        runtime::run_action(controller, PlatformAction::Configure(platform));
                                    }
                                >
                                    "Configure"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="platform-actions">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| runtime::run_action(controller, PlatformAction::ValidateMapping)
                >
                    "Validate Mapping"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| runtime::run_action(controller, PlatformAction::Sync)
                >
                    "Sync Data"
                </button>
                <button class="btn btn-primary" on:click=on_export>
                    "Export Configuration"
                </button>
            </div>
        </div>
    }
}
