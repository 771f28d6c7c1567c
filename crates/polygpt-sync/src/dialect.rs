//! Provider DOM dialects: how each family's input is found and written.

use polygpt_common::ProviderKey;

use crate::diff::{compute_edits, Edit};
use crate::page::{LocateRule, WriteMode};

/// Provider-specific variant of the adapter capabilities.
pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str;

    fn locate_rule(&self) -> LocateRule {
        LocateRule::Direct
    }

    /// Write that brings a page holding `shadow` to `full`.
    fn write_mode(&self, _shadow: &str, full: &str) -> WriteMode {
        WriteMode::Replace {
            text: full.to_string(),
        }
    }

    /// Write that brings a page of unknown content to `full`.
    fn rebuild_mode(&self, full: &str) -> WriteMode {
        WriteMode::Replace {
            text: full.to_string(),
        }
    }

    fn focus_before_write(&self) -> bool {
        false
    }
}

/// Plain textarea or contenteditable, rebuilt on every change.
pub struct ChatGpt;

impl Dialect for ChatGpt {
    fn name(&self) -> &'static str {
        "chatgpt"
    }
}

pub struct Claude;

impl Dialect for Claude {
    fn name(&self) -> &'static str {
        "claude"
    }
}

/// Input wrapped in a `rich-textarea` custom element.
pub struct Gemini;

impl Dialect for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn locate_rule(&self) -> LocateRule {
        LocateRule::RichTextarea
    }
}

/// Editor that loses state on full rebuilds; written with caret edits.
pub struct Perplexity;

impl Dialect for Perplexity {
    fn name(&self) -> &'static str {
        "perplexity"
    }

    fn write_mode(&self, shadow: &str, full: &str) -> WriteMode {
        WriteMode::Edits {
            edits: compute_edits(shadow, full),
            full: full.to_string(),
        }
    }

    fn rebuild_mode(&self, full: &str) -> WriteMode {
        let mut edits = vec![Edit::ClearAll];
        if !full.is_empty() {
            edits.push(Edit::InsertAtEnd(full.to_string()));
        }
        WriteMode::Edits {
            edits,
            full: full.to_string(),
        }
    }

    fn focus_before_write(&self) -> bool {
        true
    }
}

pub fn dialect_for(key: ProviderKey) -> Box<dyn Dialect> {
    match key {
        ProviderKey::ChatGpt => Box::new(ChatGpt),
        ProviderKey::Claude => Box::new(Claude),
        ProviderKey::Gemini => Box::new(Gemini),
        ProviderKey::Perplexity => Box::new(Perplexity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_provider_has_a_matching_dialect() {
        for key in ProviderKey::ALL {
            assert_eq!(dialect_for(key).name(), key.as_str());
        }
    }

    #[test]
    fn only_gemini_descends() {
        for key in ProviderKey::ALL {
            let expected = if key == ProviderKey::Gemini {
                LocateRule::RichTextarea
            } else {
                LocateRule::Direct
            };
            assert_eq!(dialect_for(key).locate_rule(), expected);
        }
    }

    #[test]
    fn perplexity_writes_suffix_edits() {
        let mode = Perplexity.write_mode("Hello", "Hello world");
        assert_eq!(
            mode,
            WriteMode::Edits {
                edits: vec![Edit::InsertAtEnd(" world".into())],
                full: "Hello world".into(),
            }
        );
        assert!(Perplexity.focus_before_write());
    }

    #[test]
    fn default_dialects_replace() {
        let mode = Claude.write_mode("Hello", "Hello world");
        assert_eq!(
            mode,
            WriteMode::Replace {
                text: "Hello world".into()
            }
        );
        assert!(!Claude.focus_before_write());
    }
}
