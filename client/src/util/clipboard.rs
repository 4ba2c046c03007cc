//! Clipboard copy with a hidden-selection fallback.
//!
//! Prefers `navigator.clipboard.writeText`. When that API is missing
//! (insecure context, old browser) or rejects, a temporary off-screen
//! `<textarea>` is selected and `document.execCommand("copy")` is issued.
//! The outcome only feeds a toast; it never changes page state.

#![allow(clippy::unused_async)]

use crate::state::toast::ToastKind;

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Mechanism that completed a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    ClipboardApi,
    Selection,
}

/// Copy `text` to the system clipboard. `None` means every mechanism failed.
pub async fn copy_text(text: &str) -> Option<CopyMethod> {
    #[cfg(feature = "hydrate")]
    {
        if write_with_clipboard_api(text).await {
            return Some(CopyMethod::ClipboardApi);
        }
        copy_with_selection(text).then_some(CopyMethod::Selection)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        None
    }
}

/// Toast text and style for a copy outcome.
#[must_use]
pub fn outcome_toast(outcome: Option<CopyMethod>) -> (&'static str, ToastKind) {
    match outcome {
        Some(_) => ("方程式已复制到剪贴板", ToastKind::Success),
        None => ("复制失败，请手动选择文本复制", ToastKind::Error),
    }
}

#[cfg(feature = "hydrate")]
async fn write_with_clipboard_api(text: &str) -> bool {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    // `navigator.clipboard` is undefined outside secure contexts.
    let clipboard = match js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value.unchecked_into::<web_sys::Clipboard>(),
        _ => return false,
    };
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .is_ok()
}

#[cfg(feature = "hydrate")]
fn copy_with_selection(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    textarea.set_value(text);
    let _ = textarea.set_attribute("readonly", "");
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");
    if body.append_child(&textarea).is_err() {
        return false;
    }

    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}
