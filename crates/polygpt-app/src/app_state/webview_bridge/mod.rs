//! Bridge between the sync engine and the webviews.
//!
//! Handles coordinate conversion, the `ViewHost` implementation over wry,
//! IPC dispatch from pages and delivery of adapter output.

mod bounds;
mod host;
mod ipc_dispatch;
mod outbound;

pub(super) use host::WryHost;
pub(super) use outbound::notify_payload;
