//! The page side of the isolation boundary: wire protocol, document model
//! and the agent semantics each provider view runs.

mod agent;
mod dom;
#[cfg(test)]
pub(crate) mod fake;
mod protocol;

pub use agent::{execute, locate_input, AgentState};
pub use dom::{Dom, DomEvent, InvalidSelector, NodeId, SurfaceKind};
pub use protocol::{
    InjectRequest, LocateRule, PageLogLevel, PageReply, PageRequest, SubmitVia, WriteMode,
};
