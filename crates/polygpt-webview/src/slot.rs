//! Identity of each webview in the window.

use std::fmt;

use polygpt_common::Position;

/// One webview in the window: the compose bar or a provider view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewSlot {
    Compose,
    Provider(Position),
}

impl ViewSlot {
    /// Every slot, compose bar first.
    pub const ALL: [ViewSlot; 5] = [
        ViewSlot::Compose,
        ViewSlot::Provider(Position::TopLeft),
        ViewSlot::Provider(Position::TopRight),
        ViewSlot::Provider(Position::BottomLeft),
        ViewSlot::Provider(Position::BottomRight),
    ];

    pub fn position(self) -> Option<Position> {
        match self {
            Self::Compose => None,
            Self::Provider(p) => Some(p),
        }
    }

    pub fn is_provider(self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

impl From<Position> for ViewSlot {
    fn from(position: Position) -> Self {
        Self::Provider(position)
    }
}

impl fmt::Display for ViewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compose => f.write_str("compose"),
            Self::Provider(p) => write!(f, "{p}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_sorts_first() {
        let mut slots = vec![
            ViewSlot::Provider(Position::BottomRight),
            ViewSlot::Compose,
            ViewSlot::Provider(Position::TopLeft),
        ];
        slots.sort();
        assert_eq!(slots[0], ViewSlot::Compose);
        assert_eq!(slots[1], ViewSlot::Provider(Position::TopLeft));
    }

    #[test]
    fn display_uses_position_names() {
        assert_eq!(ViewSlot::Compose.to_string(), "compose");
        assert_eq!(
            ViewSlot::from(Position::TopRight).to_string(),
            "top-right"
        );
        assert_eq!(ViewSlot::Compose.position(), None);
        assert!(ViewSlot::Provider(Position::BottomLeft).is_provider());
    }
}
