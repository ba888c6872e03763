//! List Manager
//!
//! Owns the task list and its name, applies every mutation, writes the full
//! snapshot to the store after each one and pushes a new view to the surface.

use crate::error::ListError;
use crate::models::{normalize_list_name, ListState, Task};
use crate::snapshot;
use crate::traits::{SnapshotStore, Surface};
use crate::view::{self, ViewMarks};

/// Shown when exporting a list with no tasks
pub const EMPTY_EXPORT_NOTICE: &str = "Operation Aborted: System register is empty.";
/// Shown when an imported file has the wrong structure
pub const INVALID_IMPORT_NOTICE: &str = "Err: State format invalid.";
/// Shown when an imported file is not JSON at all
pub const CORRUPT_IMPORT_NOTICE: &str = "Err: State corruption detected during load.";

/// Milliseconds since the Unix epoch
pub type Clock = fn() -> u64;

pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

pub struct ListManager<S, V> {
    state: ListState,
    store: S,
    surface: V,
    clock: Clock,
    /// Highlighted on the next render only
    just_added: Option<String>,
    editing: Option<String>,
    /// Push the list name into the name field on the next render
    sync_list_name: bool,
}

impl<S: SnapshotStore, V: Surface> ListManager<S, V> {
    pub fn new(store: S, surface: V) -> Self {
        Self {
            state: ListState::default(),
            store,
            surface,
            clock: now_millis,
            just_added: None,
            editing: None,
            sync_list_name: false,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_empty(&self) -> bool {
        self.state.tasks.is_empty()
    }

    pub fn list_name_input(&self) -> String {
        view::list_name_input(&self.state.list_name)
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Read the persisted snapshot and show it. Corrupt data is logged and
    /// ignored; the list starts empty.
    pub fn load(&mut self) {
        match self.store.read() {
            Ok(Some(raw)) => match snapshot::parse(&raw) {
                Ok(state) => {
                    log::info!("[LIST] Loaded {} tasks from storage", state.tasks.len());
                    self.state = state;
                }
                Err(e) => log::error!("[LIST] Failed to parse stored list: {}", e),
            },
            Ok(None) => log::debug!("[LIST] No stored list, starting empty"),
            Err(e) => log::error!("[LIST] Failed to read stored list: {}", e),
        }
        self.just_added = None;
        self.editing = None;
        self.sync_list_name = true;
        self.render();
    }

    /// Append a task. Returns the new id, or `None` for blank text.
    pub fn add(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.state.tasks.push(Task::new(id.clone(), text.to_string()));
        self.just_added = Some(id.clone());
        self.persist();
        self.render();
        Some(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.state.find_mut(id) else {
            return false;
        };
        task.completed = !task.completed;
        self.persist();
        self.render();
        true
    }

    /// Replace a task's text. Blank text keeps the old text. Returns whether
    /// anything changed.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        let changed = match self.state.find_mut(id) {
            Some(task) if !new_text.is_empty() && task.text != new_text => {
                task.text = new_text.to_string();
                true
            }
            Some(_) => false,
            None => return false,
        };
        if changed {
            self.persist();
        }
        self.render();
        changed
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id != id);
        if self.state.tasks.len() == before {
            return false;
        }
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        if self.just_added.as_deref() == Some(id) {
            self.just_added = None;
        }
        self.persist();
        self.render();
        true
    }

    /// Rename the list. Nothing is re-rendered, and later renders leave the
    /// name field alone so the user's typing is never rewritten.
    pub fn set_list_name(&mut self, name: &str) {
        self.state.list_name = normalize_list_name(name);
        self.persist();
    }

    /// Start editing a task inline
    pub fn begin_edit(&mut self, id: &str) -> bool {
        if !self.state.contains(id) {
            return false;
        }
        self.editing = Some(id.to_string());
        self.render();
        true
    }

    /// Finish an inline edit. Only the first commit for an edit session
    /// applies; later commits (Enter then blur) are ignored.
    pub fn commit_edit(&mut self, id: &str, new_text: &str) -> bool {
        if self.editing.as_deref() != Some(id) {
            return false;
        }
        self.editing = None;
        self.edit(id, new_text)
    }

    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.render();
        }
    }

    /// Offer the list as a JSON download. Refuses with a notice when empty.
    pub fn export(&self) -> bool {
        if self.is_empty() {
            self.surface.notify(EMPTY_EXPORT_NOTICE);
            return false;
        }

        let filename = snapshot::export_filename(&self.state.list_name);
        let result = snapshot::to_pretty_json(&self.state)
            .and_then(|json| self.surface.offer_download(&filename, &json));
        match result {
            Ok(()) => {
                log::info!("[LIST] Exported {} tasks to {}", self.state.tasks.len(), filename);
                true
            }
            Err(e) => {
                log::error!("[LIST] Export failed: {}", e);
                false
            }
        }
    }

    /// Replace the whole list with imported JSON. On failure the current
    /// list is kept and the user is told why.
    pub fn import(&mut self, raw: &str) -> bool {
        match snapshot::parse(raw) {
            Ok(state) => {
                log::info!(
                    "[LIST] Imported {} tasks into {:?}",
                    state.tasks.len(),
                    state.list_name
                );
                self.state = state;
                self.just_added = None;
                self.editing = None;
                self.sync_list_name = true;
                self.persist();
                self.render();
                true
            }
            Err(e) => {
                self.reject_import(&e);
                false
            }
        }
    }

    /// Tell the user an import did not happen. Also used when the file
    /// itself could not be read.
    pub fn reject_import(&self, error: &ListError) {
        log::error!("[LIST] Import rejected: {}", error);
        match error {
            ListError::InvalidFormat(_) => self.surface.notify(INVALID_IMPORT_NOTICE),
            _ => self.surface.notify(CORRUPT_IMPORT_NOTICE),
        }
    }

    fn next_id(&self) -> String {
        let now = (self.clock)();
        let newest = self
            .state
            .tasks
            .iter()
            .filter_map(|task| task.id.parse::<u64>().ok())
            .max();
        // Ids must stay truthy, so never hand out 0
        let start = match newest {
            Some(max) if max >= now => max.checked_add(1).unwrap_or(now),
            _ => now,
        }
        .max(1);

        (start..=u64::MAX)
            .chain(1..start)
            .map(|candidate| candidate.to_string())
            .find(|candidate| !self.state.contains(candidate))
            .unwrap_or_else(|| format!("{}-{}", start, self.state.tasks.len()))
    }

    fn persist(&self) {
        if let Err(e) = self.store.write(&self.state) {
            log::error!("[LIST] Failed to save list: {}", e);
        }
    }

    fn render(&mut self) {
        let just_added = self.just_added.take();
        let marks = ViewMarks {
            just_added: just_added.as_deref(),
            editing: self.editing.as_deref(),
            sync_list_name: std::mem::take(&mut self.sync_list_name),
        };
        self.surface.render(view::build(&self.state, &marks));
    }
}
