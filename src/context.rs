//! Application Context
//!
//! The list manager and its view, shared with components via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::{BrowserStore, StoreSurface};
use crate::error::ListError;
use crate::manager::ListManager;
use crate::view::ListView;

pub type BrowserManager = ListManager<BrowserStore, StoreSurface>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered list, written only by the manager
    pub view: Store<ListView>,
    manager: StoredValue<BrowserManager>,
}

impl AppContext {
    pub fn new() -> Self {
        let view = Store::new(ListView::default());
        let manager = ListManager::new(BrowserStore::new(), StoreSurface::new(view));
        Self {
            view,
            manager: StoredValue::new(manager),
        }
    }

    pub fn load(&self) {
        self.manager.update_value(|m| m.load());
    }

    pub fn add(&self, text: &str) {
        self.manager.update_value(|m| {
            m.add(text);
        });
    }

    pub fn toggle(&self, id: &str) {
        self.manager.update_value(|m| {
            m.toggle(id);
        });
    }

    pub fn delete(&self, id: &str) {
        self.manager.update_value(|m| {
            m.delete(id);
        });
    }

    pub fn begin_edit(&self, id: &str) {
        self.manager.update_value(|m| {
            m.begin_edit(id);
        });
    }

    pub fn commit_edit(&self, id: &str, text: &str) {
        self.manager.update_value(|m| {
            m.commit_edit(id, text);
        });
    }

    pub fn cancel_edit(&self) {
        self.manager.update_value(|m| m.cancel_edit());
    }

    pub fn set_list_name(&self, name: &str) {
        self.manager.update_value(|m| m.set_list_name(name));
    }

    pub fn export(&self) {
        self.manager.with_value(|m| {
            m.export();
        });
    }

    /// Returns whether the import replaced the list
    pub fn import(&self, raw: &str) -> bool {
        self.manager
            .try_update_value(|m| m.import(raw))
            .unwrap_or(false)
    }

    pub fn reject_import(&self, error: &ListError) {
        self.manager.with_value(|m| m.reject_import(error));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
