mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_overlap_excludes_shared_edges() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        let c = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn position_wire_format_is_kebab_case() {
        let json = serde_json::to_string(&Position::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
        let back: Position = serde_json::from_str("\"top-left\"").unwrap();
        assert_eq!(back, Position::TopLeft);
    }

    #[test]
    fn position_from_str_matches_display() {
        for p in Position::ALL {
            assert_eq!(p.to_string().parse::<Position>().unwrap(), p);
        }
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn position_grid_coordinates() {
        assert_eq!((Position::TopLeft.row(), Position::TopLeft.column()), (0, 0));
        assert_eq!((Position::TopRight.row(), Position::TopRight.column()), (0, 1));
        assert_eq!(
            (Position::BottomLeft.row(), Position::BottomLeft.column()),
            (1, 0)
        );
        assert_eq!(
            (Position::BottomRight.row(), Position::BottomRight.column()),
            (1, 1)
        );
    }

    #[test]
    fn provider_key_wire_format() {
        let json = serde_json::to_string(&ProviderKey::ChatGpt).unwrap();
        assert_eq!(json, "\"chatgpt\"");
        for key in ProviderKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            assert_eq!(key.as_str().parse::<ProviderKey>().unwrap(), key);
        }
    }

    #[test]
    fn provider_urls_are_https() {
        for key in ProviderKey::ALL {
            assert!(key.start_url().starts_with("https://"), "{key}");
        }
    }

    #[test]
    fn only_perplexity_overrides_user_agent() {
        assert!(ProviderKey::Perplexity.user_agent().is_some());
        assert!(ProviderKey::ChatGpt.user_agent().is_none());
        assert!(ProviderKey::Claude.user_agent().is_none());
        assert!(ProviderKey::Gemini.user_agent().is_none());
    }

    #[test]
    fn choices_cover_every_provider() {
        let choices = ProviderKey::choices();
        assert_eq!(choices.len(), ProviderKey::ALL.len());
        assert_eq!(choices[0].name, "ChatGPT");
        let json = serde_json::to_value(&choices[1]).unwrap();
        assert_eq!(json["key"], "claude");
        assert_eq!(json["name"], "Claude");
    }
}
