//! ファイルのダウンロード（Blob URL経由）

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 文字列をファイルとしてダウンロードさせる
pub fn download_text(body: &str, file_name: &str, mime_type: &str) -> Result<(), String> {
    save(body, file_name, mime_type).map_err(|e| format!("ダウンロード失敗: {:?}", e))
}

fn save(body: &str, file_name: &str, mime_type: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body_element = document
        .body()
        .ok_or_else(|| JsValue::from_str("body unavailable"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body_element.append_child(&anchor)?;
    anchor.click();
    body_element.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
