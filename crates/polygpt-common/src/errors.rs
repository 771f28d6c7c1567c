use std::path::PathBuf;

use crate::types::{Position, ProviderKey};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures inside the synchronization engine. None of these are fatal:
/// callers log them and carry on with the remaining targets.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("channel closed: {0}")]
    ChannelClosed(&'static str),

    #[error("no adapter at {0}")]
    NoAdapter(Position),

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("{provider} has no {role} selectors configured")]
    MissingSelectors {
        provider: ProviderKey,
        role: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("no view at {0}")]
    NoView(Position),

    #[error("view creation failed: {0}")]
    Create(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("script evaluation failed: {0}")]
    Script(String),

    #[error("webview operation failed: {0}")]
    Webview(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PolyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("layout.gap = 99".into());
        assert_eq!(err.to_string(), "config validation error: layout.gap = 99");
    }

    #[test]
    fn sync_error_display() {
        let err = SyncError::NoAdapter(Position::TopRight);
        assert_eq!(err.to_string(), "no adapter at top-right");

        let err = SyncError::MissingSelectors {
            provider: ProviderKey::Gemini,
            role: "submit",
        };
        assert_eq!(err.to_string(), "gemini has no submit selectors configured");

        let err = SyncError::ChannelClosed("controller");
        assert_eq!(err.to_string(), "channel closed: controller");
    }

    #[test]
    fn view_error_display() {
        let err = ViewError::NoView(Position::BottomLeft);
        assert_eq!(err.to_string(), "no view at bottom-left");
        assert_eq!(
            ViewError::Webview("no compose view".into()).to_string(),
            "webview operation failed: no compose view"
        );
    }

    #[test]
    fn poly_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PolyError = config_err.into();
        assert!(matches!(err, PolyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn config_io_error_names_the_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("/etc/polygpt/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "cannot access /etc/polygpt/config.toml: denied"
        );
    }

    #[test]
    fn poly_error_from_sync_and_view() {
        let err: PolyError = SyncError::UnknownProvider("bard".into()).into();
        assert!(matches!(err, PolyError::Sync(_)));
        assert_eq!(err.to_string(), "unknown provider: bard");

        let err: PolyError = ViewError::Script("syntax".into()).into();
        assert!(matches!(err, PolyError::View(_)));
    }

    #[test]
    fn poly_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PolyError = io_err.into();
        assert!(matches!(err, PolyError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
