//! メインアプリケーションコンポーネント

use crate::bindings;
use crate::components::{
    component_cards::ComponentCards,
    dashboard::Dashboard,
    edit_modal::EditModal,
    header::Header,
    notification_toast::NotificationToast,
    platform_panel::PlatformPanel,
    progress_bar::ProgressBar,
    results_panel::ResultsPanel,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::runtime::Controller;
use leptos::prelude::*;
use partnership_ai_common::{AppController, Section};

/// セクションの表示切り替え用ラッパー
#[component]
fn SectionView(visible: Memo<Option<Section>>, section: Section, children: Children) -> impl IntoView {
    view! {
        <section
            id=section.id()
            class="section"
            class:active=move || visible.get() == Some(section)
        >
            {children()}
        </section>
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller: Controller = RwSignal::new(AppController::new());

    if let Err(e) = bindings::install(controller) {
        log::error!("Failed to install global namespace: {:?}", e);
    }

    let visible = Memo::new(move |_| controller.with(|c| c.visible_section()));

    view! {
        <div class="container">
            <Header controller=controller visible=visible />

            <main>
                <SectionView visible=visible section=Section::Dashboard>
                    <Dashboard controller=controller />
                </SectionView>

                <SectionView visible=visible section=Section::Upload>
                    <UploadArea controller=controller />
                </SectionView>

                <SectionView visible=visible section=Section::Analysis>
                    <ProgressBar controller=controller />
                    <ComponentCards controller=controller />
                </SectionView>

                <SectionView visible=visible section=Section::Results>
                    <ResultsPanel controller=controller />
                </SectionView>

                <SectionView visible=visible section=Section::Platforms>
                    <PlatformPanel controller=controller />
                </SectionView>

                <SectionView visible=visible section=Section::Settings>
                    <SettingsPanel controller=controller />
                </SectionView>
            </main>

            <EditModal controller=controller />
            <NotificationToast controller=controller />
        </div>
    }
}
