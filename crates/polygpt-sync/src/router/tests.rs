use polygpt_common::Position::{BottomRight, TopLeft, TopRight};
use polygpt_layout::{LayoutEngine, LayoutMode, ZoomLevel};
use tokio::sync::mpsc;

use super::*;
use crate::controller::ControllerMsg;

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    Bounds(LayoutMode),
    Load(Position, ProviderKey),
    ReloadAll,
    Zoom(Position, f64),
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<HostCall>,
    /// Loads of this provider fail.
    broken: Option<ProviderKey>,
}

impl ViewHost for RecordingHost {
    fn apply_bounds(&mut self, snapshot: &LayoutSnapshot) -> Result<(), ViewError> {
        self.calls.push(HostCall::Bounds(snapshot.mode));
        Ok(())
    }

    fn load_provider(
        &mut self,
        position: Position,
        provider: ProviderKey,
    ) -> Result<(), ViewError> {
        if self.broken == Some(provider) {
            return Err(ViewError::Navigation("offline".into()));
        }
        self.calls.push(HostCall::Load(position, provider));
        Ok(())
    }

    fn reload_all(&mut self) -> Result<(), ViewError> {
        self.calls.push(HostCall::ReloadAll);
        Ok(())
    }

    fn set_view_zoom(&mut self, position: Position, factor: f64) -> Result<(), ViewError> {
        self.calls.push(HostCall::Zoom(position, factor));
        Ok(())
    }
}

fn router() -> (
    CommandRouter<RecordingHost>,
    mpsc::UnboundedReceiver<ControllerMsg>,
) {
    let layout = LayoutManager::new(
        LayoutEngine::default(),
        ZoomLevel::default(),
        [
            (TopLeft, ProviderKey::Claude),
            (TopRight, ProviderKey::Perplexity),
            (Position::BottomLeft, ProviderKey::ChatGpt),
            (BottomRight, ProviderKey::Gemini),
        ],
        WindowSize::new(1600, 900),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let router = CommandRouter::new(
        layout,
        ControllerHandle::from_sender(tx),
        RecordingHost::default(),
    );
    (router, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<ControllerMsg>) -> Vec<ControllerMsg> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        out.push(msg);
    }
    out
}

#[test]
fn compose_commands_reach_the_controller() {
    let (mut router, mut rx) = router();
    for cmd in [
        Command::SendTextUpdate("hi".into()),
        Command::Submit,
        Command::RequestNewChat,
        Command::RescanSelectors,
    ] {
        assert_eq!(router.dispatch(cmd), CommandResponse::Ack);
    }
    assert_eq!(
        drain(&mut rx),
        vec![
            ControllerMsg::ComposeChanged("hi".into()),
            ControllerMsg::Submit,
            ControllerMsg::NewChat,
            ControllerMsg::Rescan,
        ]
    );
    assert!(router.host().calls.is_empty());
}

#[test]
fn toggle_supersize_pushes_bounds_and_returns_focus() {
    let (mut router, _rx) = router();
    assert_eq!(
        router.dispatch(Command::ToggleSupersize(TopRight)),
        CommandResponse::Focus(Some(TopRight))
    );
    assert_eq!(
        router.dispatch(Command::ToggleSupersize(TopRight)),
        CommandResponse::Focus(None)
    );
    assert_eq!(
        router.host().calls,
        vec![
            HostCall::Bounds(LayoutMode::Supersized(TopRight)),
            HostCall::Bounds(LayoutMode::Grid),
        ]
    );
}

#[test]
fn zoom_applies_to_every_view() {
    let (mut router, _rx) = router();
    assert_eq!(router.dispatch(Command::ZoomIn), CommandResponse::Zoom(1.1));
    assert_eq!(router.host().calls.len(), Position::ALL.len());
    assert!(router
        .host()
        .calls
        .iter()
        .all(|c| matches!(c, HostCall::Zoom(_, f) if *f == 1.1)));

    assert_eq!(router.dispatch(Command::ZoomOut), CommandResponse::Zoom(1.0));
}

#[test]
fn change_provider_reassigns_and_loads() {
    let (mut router, mut rx) = router();
    router.dispatch(Command::ToggleSupersize(TopLeft));
    router.host_mut().calls.clear();

    let response = router.dispatch(Command::ChangeProvider {
        position: BottomRight,
        provider: ProviderKey::Claude,
    });

    assert_eq!(response, CommandResponse::Changed(true));
    assert_eq!(
        router.layout().provider_at(BottomRight),
        Some(ProviderKey::Claude)
    );
    assert_eq!(router.layout().mode(), LayoutMode::Supersized(TopLeft));
    assert_eq!(
        router.host().calls,
        vec![HostCall::Load(BottomRight, ProviderKey::Claude)]
    );
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMsg::Reassign {
            position: BottomRight,
            provider: ProviderKey::Claude,
        }]
    );
}

#[test]
fn unchanged_provider_is_rejected() {
    let (mut router, mut rx) = router();
    let response = router.dispatch(Command::ChangeProvider {
        position: TopLeft,
        provider: ProviderKey::Claude,
    });
    assert_eq!(response, CommandResponse::Changed(false));
    assert!(drain(&mut rx).is_empty());
    assert!(router.host().calls.is_empty());
}

#[test]
fn failed_load_restores_previous_provider() {
    let (mut router, mut rx) = router();
    router.dispatch(Command::ToggleSupersize(TopLeft));
    router.host_mut().calls.clear();
    router.host_mut().broken = Some(ProviderKey::Gemini);

    let response = router.dispatch(Command::ChangeProvider {
        position: TopRight,
        provider: ProviderKey::Gemini,
    });

    assert_eq!(response, CommandResponse::Changed(false));
    assert_eq!(
        router.layout().provider_at(TopRight),
        Some(ProviderKey::Perplexity)
    );
    assert_eq!(router.layout().mode(), LayoutMode::Supersized(TopLeft));
    // The old view is rebuilt; the controller never hears of the swap.
    assert_eq!(
        router.host().calls,
        vec![HostCall::Load(TopRight, ProviderKey::Perplexity)]
    );
    assert!(drain(&mut rx).is_empty());

    router.host_mut().broken = None;
    router.host_mut().calls.clear();
    assert_eq!(
        router.dispatch(Command::ChangeProvider {
            position: TopRight,
            provider: ProviderKey::Gemini,
        }),
        CommandResponse::Changed(true)
    );
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMsg::Reassign {
            position: TopRight,
            provider: ProviderKey::Gemini,
        }]
    );
}

#[test]
fn refresh_reloads_all_views() {
    let (mut router, _rx) = router();
    assert_eq!(router.dispatch(Command::RefreshAll), CommandResponse::Ack);
    assert_eq!(router.host().calls, vec![HostCall::ReloadAll]);
}

#[test]
fn page_load_restores_zoom_and_notifies_adapter() {
    let (mut router, mut rx) = router();
    router.dispatch(Command::ZoomIn);
    router.host_mut().calls.clear();

    router.page_loaded(TopRight);

    assert_eq!(router.host().calls, vec![HostCall::Zoom(TopRight, 1.1)]);
    assert_eq!(drain(&mut rx), vec![ControllerMsg::PageLoaded(TopRight)]);
}

#[test]
fn resize_pushes_new_bounds() {
    let (mut router, _rx) = router();
    router.resize(800, 600);
    assert_eq!(router.layout().window(), WindowSize::new(800, 600));
    assert_eq!(router.host().calls, vec![HostCall::Bounds(LayoutMode::Grid)]);
}

#[test]
fn closed_controller_still_acks() {
    let (mut router, rx) = router();
    drop(rx);
    assert_eq!(router.dispatch(Command::Submit), CommandResponse::Ack);
}
