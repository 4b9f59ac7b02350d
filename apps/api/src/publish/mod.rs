// Publishing: slug/path derivation, the remote file store seam, and its GitHub adapter.

pub mod github;
pub mod publisher;
pub mod slug;
pub mod store;
