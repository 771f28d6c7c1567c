//! Selector resolution: ordered candidates to the first live match.

use tracing::trace;

use crate::page::{Dom, NodeId};

/// First element matched by `candidates`, tried in order.
///
/// A candidate the document cannot parse counts as a non-match. No
/// retries and no side effects; callers re-resolve on every use.
pub fn resolve<D: Dom + ?Sized, S: AsRef<str>>(dom: &D, candidates: &[S]) -> Option<NodeId> {
    resolve_in(dom, None, candidates)
}

/// Like [`resolve`], restricted to descendants of `scope`.
pub fn resolve_within<D: Dom + ?Sized, S: AsRef<str>>(
    dom: &D,
    scope: NodeId,
    candidates: &[S],
) -> Option<NodeId> {
    resolve_in(dom, Some(scope), candidates)
}

fn resolve_in<D: Dom + ?Sized, S: AsRef<str>>(
    dom: &D,
    scope: Option<NodeId>,
    candidates: &[S],
) -> Option<NodeId> {
    for candidate in candidates {
        let selector = candidate.as_ref();
        match dom.query(scope, selector) {
            Ok(Some(node)) => return Some(node),
            Ok(None) => {}
            Err(e) => trace!("skipping candidate: {e}"),
        }
    }
    None
}
