//! Property-based tests for the normalizer and the cell labeler

use proptest::prelude::*;
use survml::survml::cells::label_lines;
use survml::survml::normalize::normalize;

proptest! {
    #[test]
    fn normalize_never_panics(s in ".*") {
        let _ = normalize(&s);
    }

    #[test]
    fn normalize_is_idempotent(s in "\\PC*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn dashes_become_entities_never_bare_hyphens(s in "[a-z \\u{2014}\\u{2013}]*") {
        let out = normalize(&s);
        prop_assert!(!out.contains('\u{2014}'), "output still contains a bare em dash");
        prop_assert!(!out.contains('\u{2013}'), "output still contains a bare en dash");
        // The entities spell the dash out; nothing degrades to an ASCII dash
        prop_assert!(!out.contains('-'), "output still contains a bare hyphen");
    }

    #[test]
    fn labeler_preserves_fragment_count(lines in prop::collection::vec("[^\\n]*", 1..8)) {
        let text = lines.join("\n");
        let labeled = label_lines(&text, "\n");
        prop_assert_eq!(labeled.len(), lines.len());
    }
}
