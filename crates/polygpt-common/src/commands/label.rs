use super::Command;

impl Command {
    /// Short human-readable name, used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Command::SendTextUpdate(_) => "Send Text Update",
            Command::Submit => "Submit",
            Command::RequestNewChat => "New Chat",
            Command::RefreshAll => "Refresh All",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ToggleSupersize(_) => "Toggle Supersize",
            Command::ChangeProvider { .. } => "Change Provider",
            Command::RescanSelectors => "Rescan Selectors",
        }
    }

    /// Wire name, as sent in the `command` field.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SendTextUpdate(_) => "send-text-update",
            Command::Submit => "submit",
            Command::RequestNewChat => "request-new-chat",
            Command::RefreshAll => "refresh-all",
            Command::ZoomIn => "zoom-in",
            Command::ZoomOut => "zoom-out",
            Command::ToggleSupersize(_) => "toggle-supersize",
            Command::ChangeProvider { .. } => "change-provider",
            Command::RescanSelectors => "rescan-selectors",
        }
    }

    /// Commands that touch the layout or the views rather than the
    /// text stream.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            Command::RefreshAll
                | Command::ZoomIn
                | Command::ZoomOut
                | Command::ToggleSupersize(_)
                | Command::ChangeProvider { .. }
        )
    }
}
