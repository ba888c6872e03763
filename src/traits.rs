//! Collaborator Traits
//!
//! The list manager never touches the browser directly. Persistence and the
//! display surface are injected through these traits, so the manager can be
//! driven in tests by in-memory doubles.

use crate::error::ListResult;
use crate::models::ListState;
use crate::view::ListView;

/// Key-value persistence for the whole list snapshot
pub trait SnapshotStore {
    /// Raw persisted JSON, `None` when nothing has been saved yet
    fn read(&self) -> ListResult<Option<String>>;

    /// Replace the persisted snapshot with `state`
    fn write(&self, state: &ListState) -> ListResult<()>;
}

/// Where the list is shown and where the user is talked to
pub trait Surface {
    /// Apply a freshly built view
    fn render(&self, view: ListView);

    /// Blocking, user-visible notice
    fn notify(&self, message: &str);

    /// Offer `contents` to the user as a file named `filename`
    fn offer_download(&self, filename: &str, contents: &str) -> ListResult<()>;
}
