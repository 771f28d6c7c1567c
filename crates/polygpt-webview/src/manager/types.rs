use polygpt_common::ProviderKey;

/// Configuration for creating a new webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (takes precedence over `html`).
    pub url: Option<String>,
    /// Initial HTML content to render.
    pub html: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string; `None` keeps the platform default.
    pub user_agent: Option<String>,
    /// Colour painted before the first frame, as RGBA.
    pub background: Option<(u8, u8, u8, u8)>,
    /// Inject the page agent (provider views only).
    pub page_agent: bool,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            background: None,
            page_agent: false,
            clipboard: true,
            autoplay: false,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// A provider view: its start page, its user agent, the page agent.
    pub fn for_provider(provider: ProviderKey) -> Self {
        Self {
            url: Some(provider.start_url().to_string()),
            user_agent: provider.user_agent().map(str::to_string),
            page_agent: true,
            ..Default::default()
        }
    }

    pub fn background(mut self, color: &str) -> Self {
        self.background = parse_hex_color(color);
        self
    }

    pub fn devtools(mut self, enabled: bool) -> Self {
        self.devtools = self.devtools || enabled;
        self
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).ok();
    match hex.len() {
        3 => {
            let [r, g, b] = [0, 1, 2].map(|i| channel(i, 1).map(|v| v * 17));
            Some((r?, g?, b?, 255))
        }
        6 => Some((channel(0, 2)?, channel(2, 2)?, channel(4, 2)?, 255)),
        8 => Some((
            channel(0, 2)?,
            channel(2, 2)?,
            channel(4, 2)?,
            channel(6, 2)?,
        )),
        _ => None,
    }
}
