//! Persistence for the set of already-notified posting ids.
//!
//! The set only ever grows: once a posting has been emailed its id stays in
//! the file so later runs never notify about it again.

mod error;
mod store;

pub use error::StoreError;
pub use store::SeenStore;
