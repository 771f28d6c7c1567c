//! Command router: the boundary between UI-originated commands and the
//! layout manager / broadcast controller.

use polygpt_common::{Command, CommandResponse, Position, ProviderKey, SyncError, ViewError};
use polygpt_layout::{LayoutCommand, LayoutManager, LayoutOutcome, LayoutSnapshot, WindowSize};
use tracing::{debug, warn};

use crate::controller::ControllerHandle;

/// The embedded views, as far as routing is concerned.
pub trait ViewHost {
    fn apply_bounds(&mut self, snapshot: &LayoutSnapshot) -> Result<(), ViewError>;

    /// Navigate the view at `position` to `provider`'s start page.
    fn load_provider(&mut self, position: Position, provider: ProviderKey)
        -> Result<(), ViewError>;

    fn reload_all(&mut self) -> Result<(), ViewError>;

    fn set_view_zoom(&mut self, position: Position, factor: f64) -> Result<(), ViewError>;

    fn set_zoom(&mut self, factor: f64) -> Result<(), ViewError> {
        for position in Position::ALL {
            self.set_view_zoom(position, factor)?;
        }
        Ok(())
    }
}

pub struct CommandRouter<H: ViewHost> {
    layout: LayoutManager,
    controller: ControllerHandle,
    host: H,
}

impl<H: ViewHost> CommandRouter<H> {
    pub fn new(layout: LayoutManager, controller: ControllerHandle, host: H) -> Self {
        Self {
            layout,
            controller,
            host,
        }
    }

    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn controller(&self) -> &ControllerHandle {
        &self.controller
    }

    pub fn dispatch(&mut self, cmd: Command) -> CommandResponse {
        debug!(command = cmd.label(), layout = cmd.is_layout(), "dispatching");
        match cmd {
            Command::SendTextUpdate(text) => {
                log_err(self.controller.compose_changed(text));
                CommandResponse::Ack
            }
            Command::Submit => {
                log_err(self.controller.submit());
                CommandResponse::Ack
            }
            Command::RequestNewChat => {
                log_err(self.controller.new_chat());
                CommandResponse::Ack
            }
            Command::RescanSelectors => {
                log_err(self.controller.rescan());
                CommandResponse::Ack
            }
            Command::RefreshAll => {
                log_err(self.host.reload_all());
                CommandResponse::Ack
            }
            Command::ZoomIn => self.zoom(LayoutCommand::ZoomIn),
            Command::ZoomOut => self.zoom(LayoutCommand::ZoomOut),
            Command::ToggleSupersize(position) => {
                let focus = self.layout.toggle_supersize(position);
                self.push_bounds();
                CommandResponse::Focus(focus)
            }
            Command::ChangeProvider { position, provider } => {
                CommandResponse::Changed(self.change_provider(position, provider))
            }
        }
    }

    /// Window resized: recompute and push every rect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.layout.resize(WindowSize::new(width, height));
        self.push_bounds();
    }

    /// Push the current bounds and zoom, e.g. once the views exist.
    pub fn sync_views(&mut self) {
        self.push_bounds();
        log_err(self.host.set_zoom(self.layout.zoom()));
    }

    /// A view finished loading: restore its zoom and tell its adapter.
    pub fn page_loaded(&mut self, position: Position) {
        log_err(self.host.set_view_zoom(position, self.layout.zoom()));
        log_err(self.controller.page_loaded(position));
    }

    fn zoom(&mut self, cmd: LayoutCommand) -> CommandResponse {
        let LayoutOutcome::Zoom(factor) = self.layout.execute(cmd) else {
            return CommandResponse::Ack;
        };
        log_err(self.host.set_zoom(factor));
        CommandResponse::Zoom(factor)
    }

    /// Reassign `position`. A view that fails to load rolls the layout back
    /// to the previous provider and leaves the controller untouched.
    fn change_provider(&mut self, position: Position, provider: ProviderKey) -> bool {
        let Some(previous) = self.layout.provider_at(position) else {
            warn!("{}", SyncError::NoAdapter(position));
            return false;
        };
        if !self.layout.change_provider(position, provider) {
            debug!(%position, %provider, "provider unchanged");
            return false;
        }
        if let Err(e) = self.host.load_provider(position, provider) {
            warn!(%position, %provider, "failed to load provider: {e}");
            self.layout.change_provider(position, previous);
            if let Err(e) = self.host.load_provider(position, previous) {
                warn!(%position, provider = %previous, "failed to restore view: {e}");
            }
            return false;
        }
        log_err(self.controller.reassign(position, provider));
        true
    }

    fn push_bounds(&mut self) {
        let snapshot = self.layout.snapshot();
        log_err(self.host.apply_bounds(&snapshot));
    }
}

fn log_err<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(e) = result {
        warn!("{e}");
    }
}

#[cfg(test)]
mod tests;
