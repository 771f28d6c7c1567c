//! Webview layer for the PolyGPT window.
//!
//! Wraps `wry` to provide:
//! - One child webview per slot (compose bar and four provider views)
//! - Bidirectional IPC (Rust <-> JavaScript) over a small JSON envelope
//! - The page agent injected into every provider page
//! - A `polygpt://` custom protocol serving the bundled compose page

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod slot;

pub use content::{ContentProvider, COMPOSE_URL};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{command_allowed_from, IpcKind, IpcMessage, PAGE_AGENT_SCRIPT};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use slot::ViewSlot;
