//! Multi-target synchronization engine.
//!
//! One compose stream fans out to every provider page in scope. The
//! [`BroadcastController`] owns the text and the throttle, one
//! [`ProviderAdapter`] per position owns the write policy for its
//! provider, and the [`CommandRouter`] turns UI commands into layout and
//! controller operations.

pub mod adapter;
pub mod controller;
pub mod dialect;
pub mod diff;
pub mod page;
pub mod resolver;
pub mod router;
pub mod sink;
pub mod throttle;

pub use adapter::{AdapterHandle, AdapterMsg, ProviderAdapter, RescanBudget, INPUT_NOT_FOUND};
pub use controller::{BroadcastController, ControllerHandle, ControllerMsg, SyncSettings};
pub use dialect::{dialect_for, Dialect};
pub use diff::{apply_edits, compute_edits, Edit};
pub use page::{PageReply, PageRequest};
pub use router::{CommandRouter, ViewHost};
pub use sink::{ChannelSink, Outbound, PageSink};
pub use throttle::Throttle;
