//! Browser Adapters
//!
//! localStorage persistence, the Leptos-backed display surface, downloads and
//! file reading. This is the only module that talks to `web_sys` for the
//! list manager.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reactive_stores::Store;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::{ListError, ListResult};
use crate::models::{ListState, STORAGE_KEY};
use crate::traits::{SnapshotStore, Surface};
use crate::view::ListView;

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Snapshot persistence in `window.localStorage`
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    key: &'static str,
}

impl BrowserStore {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for BrowserStore {
    fn read(&self) -> ListResult<Option<String>> {
        // Raw text: the stored value may be the legacy bare array
        LocalStorage::raw()
            .get_item(self.key)
            .map_err(|e| ListError::Storage(js_err(e)))
    }

    fn write(&self, state: &ListState) -> ListResult<()> {
        LocalStorage::set(self.key, state).map_err(|e| ListError::Storage(e.to_string()))
    }
}

/// Renders into a reactive `ListView` store and uses the window for
/// alerts and downloads
#[derive(Clone, Copy)]
pub struct StoreSurface {
    view: Store<ListView>,
}

impl StoreSurface {
    pub fn new(view: Store<ListView>) -> Self {
        Self { view }
    }
}

impl Surface for StoreSurface {
    fn render(&self, view: ListView) {
        *self.view.write() = view;
    }

    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("[UI] Could not show notice: {}", message);
        }
    }

    fn offer_download(&self, filename: &str, contents: &str) -> ListResult<()> {
        let href = format!(
            "data:application/json;charset=utf-8,{}",
            utf8_percent_encode(contents, URI_COMPONENT)
        );

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ListError::Download("no document".to_string()))?;
        let anchor = document
            .create_element("a")
            .map_err(|e| ListError::Download(js_err(e)))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ListError::Download("created element is not an anchor".to_string()))?;

        anchor.set_href(&href);
        anchor.set_download(filename);
        anchor.click();
        Ok(())
    }
}

/// Read a user-selected file as text
pub async fn read_file(file: web_sys::File) -> ListResult<String> {
    let name = file.name();
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| ListError::Parse(format!("{}: {}", name, js_err(e))))?;
    text.as_string()
        .ok_or_else(|| ListError::Parse(format!("{}: not a text file", name)))
}
