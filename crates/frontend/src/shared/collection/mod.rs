//! Client-side list-state synchronization
//!
//! The same pattern backs both catalog screens:
//! - `store`: the authoritative in-memory list + page window
//! - `pagination`: pure slicing of the list into pages
//! - `sub_items`: ordered lesson/benefit editor with reorder
//! - `form_session`: create/edit buffer and the submit state machine
//!
//! Data flows one way: form session -> remote client -> store. Nothing here
//! touches the DOM, so all of it is unit-tested natively.

pub mod form_session;
pub mod pagination;
pub mod store;
pub mod sub_items;

pub use form_session::{FormSession, SessionState, SubmitOutcome, SubmitTicket};
pub use pagination::{paginate, total_pages, PageWindow};
pub use store::{CollectionStore, LoadStatus};
pub use sub_items::SubItemEditor;
