//! Edit scripts that bring an editor from its previous content to a new one.
//!
//! Editors driven through caret commands (select-all, insert, delete) are
//! cheaper and less disruptive to update incrementally than to rebuild.
//! Only the three cases typing actually produces are special-cased; any
//! other change is a full replacement.

use serde::{Deserialize, Serialize};

/// A single caret-level editing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum Edit {
    /// Select the whole editor and delete the selection.
    ClearAll,
    /// Move the caret to the end and insert text there.
    InsertAtEnd(String),
    /// Move the caret to the end and delete this many characters backwards.
    DeleteBackward(usize),
}

/// Edits turning `shadow` into `full`.
pub fn compute_edits(shadow: &str, full: &str) -> Vec<Edit> {
    if shadow == full {
        return Vec::new();
    }
    if full.is_empty() {
        return vec![Edit::ClearAll];
    }
    if let Some(suffix) = full.strip_prefix(shadow) {
        return vec![Edit::InsertAtEnd(suffix.to_string())];
    }
    if shadow.starts_with(full) {
        let count = shadow.chars().count() - full.chars().count();
        return vec![Edit::DeleteBackward(count)];
    }
    vec![Edit::ClearAll, Edit::InsertAtEnd(full.to_string())]
}

/// Apply `edits` to `text` in place.
pub fn apply_edits(text: &mut String, edits: &[Edit]) {
    for edit in edits {
        match edit {
            Edit::ClearAll => text.clear(),
            Edit::InsertAtEnd(s) => text.push_str(s),
            Edit::DeleteBackward(n) => {
                for _ in 0..*n {
                    if text.pop().is_none() {
                        break;
                    }
                }
            }
        }
    }
}

/// True when applying the edits requires no prior knowledge of the content.
pub fn is_self_contained(edits: &[Edit]) -> bool {
    matches!(edits.first(), Some(Edit::ClearAll))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(shadow: &str, full: &str) -> Vec<Edit> {
        let edits = compute_edits(shadow, full);
        let mut text = shadow.to_string();
        apply_edits(&mut text, &edits);
        assert_eq!(text, full, "edits {edits:?} for {shadow:?} -> {full:?}");
        edits
    }

    #[test]
    fn equal_is_empty() {
        assert!(check("same", "same").is_empty());
        assert!(check("", "").is_empty());
    }

    #[test]
    fn empty_target_is_one_clear() {
        assert_eq!(check("something", ""), vec![Edit::ClearAll]);
    }

    #[test]
    fn extension_inserts_only_the_suffix() {
        assert_eq!(
            check("Hello", "Hello world"),
            vec![Edit::InsertAtEnd(" world".into())]
        );
        assert_eq!(check("", "abc"), vec![Edit::InsertAtEnd("abc".into())]);
    }

    #[test]
    fn truncation_deletes_the_difference() {
        assert_eq!(check("Hello world", "Hello"), vec![Edit::DeleteBackward(6)]);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(check("naïve café", "naïve"), vec![Edit::DeleteBackward(5)]);
        assert_eq!(check("ok 👍👍", "ok 👍"), vec![Edit::DeleteBackward(1)]);
    }

    #[test]
    fn divergent_change_replaces_everything() {
        let edits = check("Hello", "Help");
        assert_eq!(
            edits,
            vec![Edit::ClearAll, Edit::InsertAtEnd("Help".into())]
        );
        assert!(is_self_contained(&edits));
    }

    #[test]
    fn newlines_are_plain_characters() {
        assert_eq!(
            check("line one", "line one\nline two"),
            vec![Edit::InsertAtEnd("\nline two".into())]
        );
    }

    #[test]
    fn typing_sequence_reaches_every_value() {
        let steps = ["H", "He", "Hel", "He", "Hey", "Hey!", "", "new", "new\n", "renew"];
        let mut shadow = String::new();
        for step in steps {
            let edits = compute_edits(&shadow, step);
            apply_edits(&mut shadow, &edits);
            assert_eq!(shadow, step);
        }
    }

    #[test]
    fn edit_wire_format() {
        let json = serde_json::to_string(&vec![
            Edit::ClearAll,
            Edit::InsertAtEnd("x".into()),
            Edit::DeleteBackward(2),
        ])
        .unwrap();
        assert_eq!(
            json,
            r#"[{"op":"clear_all"},{"op":"insert_at_end","arg":"x"},{"op":"delete_backward","arg":2}]"#
        );
    }
}
