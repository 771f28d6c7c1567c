use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True if the interiors of the two rects intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A logical slot in the 2x2 view grid. Stable regardless of which
/// provider occupies it or where it currently sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// All positions in reading order.
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Column index in the grid (0 = left).
    pub fn column(&self) -> usize {
        match self {
            Position::TopLeft | Position::BottomLeft => 0,
            Position::TopRight | Position::BottomRight => 1,
        }
    }

    /// Row index in the grid (0 = top).
    pub fn row(&self) -> usize {
        match self {
            Position::TopLeft | Position::TopRight => 0,
            Position::BottomLeft | Position::BottomRight => 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown position: {s}"))
    }
}

/// One of the supported chat providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    ChatGpt,
    Claude,
    Gemini,
    Perplexity,
}

/// Desktop Chrome user agent. Perplexity serves a degraded page to
/// unrecognised engines.
const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

impl ProviderKey {
    pub const ALL: [ProviderKey; 4] = [
        ProviderKey::ChatGpt,
        ProviderKey::Claude,
        ProviderKey::Gemini,
        ProviderKey::Perplexity,
    ];

    /// Key used in the selector config and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKey::ChatGpt => "chatgpt",
            ProviderKey::Claude => "claude",
            ProviderKey::Gemini => "gemini",
            ProviderKey::Perplexity => "perplexity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKey::ChatGpt => "ChatGPT",
            ProviderKey::Claude => "Claude",
            ProviderKey::Gemini => "Gemini",
            ProviderKey::Perplexity => "Perplexity",
        }
    }

    pub fn start_url(&self) -> &'static str {
        match self {
            ProviderKey::ChatGpt => "https://chat.openai.com",
            ProviderKey::Claude => "https://claude.ai",
            ProviderKey::Gemini => "https://gemini.google.com",
            ProviderKey::Perplexity => "https://www.perplexity.ai",
        }
    }

    pub fn user_agent(&self) -> Option<&'static str> {
        match self {
            ProviderKey::Perplexity => Some(CHROME_USER_AGENT),
            _ => None,
        }
    }

    /// Entries for the provider-switch selector rendered inside each view.
    pub fn choices() -> Vec<ProviderChoice> {
        Self::ALL.iter().map(|k| ProviderChoice::from(*k)).collect()
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown provider: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderChoice {
    pub key: ProviderKey,
    pub name: String,
}

impl From<ProviderKey> for ProviderChoice {
    fn from(key: ProviderKey) -> Self {
        Self {
            key,
            name: key.display_name().to_string(),
        }
    }
}
