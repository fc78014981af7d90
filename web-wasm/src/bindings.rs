//! 外部スクリプト向けのグローバル名前空間 `window.PartnershipAI`
//!
//! - switchToSection(name)
//! - processFiles(fileList)（File の配列も可）
//! - showNotification(message, kind?)
//! - appState（getter、現在の状態のスナップショット）

use crate::components::upload_area::to_upload;
use crate::runtime::{self, Controller};
use js_sys::{Object, Reflect};
use leptos::prelude::*;
use partnership_ai_common::{NotificationKind, UploadFile};
use wasm_bindgen::prelude::*;
use web_sys::File;

const NAMESPACE: &str = "PartnershipAI";

/// `length` と添字アクセスで File を取り出す（FileList / 配列どちらでも）
fn collect_js_files(files: &JsValue) -> Vec<UploadFile> {
    let length = Reflect::get(files, &"length".into())
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;

    (0..length)
        .filter_map(|i| Reflect::get(files, &JsValue::from(i)).ok())
        .filter_map(|v| v.dyn_into::<File>().ok())
        .map(|f| to_upload(&f))
        .collect()
}

pub fn install(controller: Controller) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let namespace = Object::new();

    let switch_to_section = Closure::<dyn Fn(String)>::new(move |name: String| {
        controller.update(|c| c.switch_to_section(&name));
    });
    Reflect::set(&namespace, &"switchToSection".into(), &switch_to_section.into_js_value())?;

    let process_files = Closure::<dyn Fn(JsValue)>::new(move |files: JsValue| {
        runtime::process_files(controller, collect_js_files(&files));
    });
    Reflect::set(&namespace, &"processFiles".into(), &process_files.into_js_value())?;

    let show_notification =
        Closure::<dyn Fn(String, Option<String>)>::new(move |message: String, kind: Option<String>| {
            let kind = kind.as_deref().map(NotificationKind::parse).unwrap_or_default();
            runtime::notify(controller, message, kind);
        });
    Reflect::set(&namespace, &"showNotification".into(), &show_notification.into_js_value())?;

    let app_state = Closure::<dyn Fn() -> JsValue>::new(move || {
        controller
            .with_untracked(|c| serde_wasm_bindgen::to_value(c.state()))
            .unwrap_or_else(|e| {
                log::error!("appState serialization failed: {}", e);
                JsValue::NULL
            })
    });
    let descriptor = Object::new();
    Reflect::set(&descriptor, &"get".into(), &app_state.into_js_value())?;
    Object::define_property(&namespace, &"appState".into(), &descriptor);

    Reflect::set(&window, &NAMESPACE.into(), &namespace)?;
    log::info!("window.{} installed", NAMESPACE);
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use js_sys::Array;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file(name: &str, mime: &str) -> File {
        let parts = Array::of1(&JsValue::from_str("%PDF-1.4"));
        let options = FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &options).expect("File生成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_collect_files_from_plain_array() {
        let files = Array::of2(
            &file("agreement.pdf", "application/pdf"),
            &file("notes.txt", "text/plain"),
        );

        let uploads = collect_js_files(&files);
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].name, "agreement.pdf");
        assert_eq!(uploads[0].mime_type, "application/pdf");
        assert_eq!(uploads[0].size_bytes, 8);
    }

    #[wasm_bindgen_test]
    fn wasm_collect_files_ignores_non_lists() {
        assert!(collect_js_files(&JsValue::NULL).is_empty());
        assert!(collect_js_files(&JsValue::UNDEFINED).is_empty());
        assert!(collect_js_files(&Object::new()).is_empty());

        let mixed = Array::of2(&JsValue::from_str("x"), &file("a.doc", "application/msword"));
        let uploads = collect_js_files(&mixed);
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].name, "a.doc");
    }
}
