//! Local content served through the `polygpt://` custom protocol.
//!
//! The compose page ships inside the binary. A base directory, when set,
//! is consulted first so the page can be edited without a rebuild.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Bundled compose page, keyed by request path.
const BUNDLED: &[(&str, &str)] = &[
    ("index.html", include_str!("../assets/compose/index.html")),
    ("compose.js", include_str!("../assets/compose/compose.js")),
    ("compose.css", include_str!("../assets/compose/compose.css")),
];

/// Path the compose webview loads.
pub const COMPOSE_URL: &str = "polygpt://localhost/index.html";

/// Resolves request paths to bytes and a MIME type.
pub struct ContentProvider {
    /// Directory searched before the bundled assets.
    base_dir: Option<PathBuf>,
    /// In-memory assets (bundled plus overrides).
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    /// A provider serving only the bundled compose page.
    pub fn bundled() -> Self {
        let mut provider = Self {
            base_dir: None,
            overrides: HashMap::new(),
        };
        for (path, body) in BUNDLED {
            let mime = mime_from_extension(Path::new(path));
            provider.add_override(*path, mime, body.as_bytes());
        }
        provider
    }

    /// Serve files under `base_dir` ahead of the bundled assets.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        if let Some(found) = self.resolve_file(clean) {
            return Some(found);
        }
        self.overrides
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn resolve_file(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
