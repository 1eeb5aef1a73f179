//! Cells pipeline integration tests
//!
//! Exercises the label heuristics and renderer through the public API, the
//! way a host would drive them.

use rstest::rstest;
use survml::survml::cells::{label_lines, transform, CellOptions};

#[rstest]
#[case("r1. First option", "1", "First option")]
#[case("r2) Second option", "2", "Second option")]
#[case("ch3: Third option", "3", "Third option")]
#[case("c4. Fourth option", "4", "Fourth option")]
#[case("q7 Seventh", "q7", "Seventh")]
#[case("A5) Lettered", "A5", "Lettered")]
fn explicit_labels_are_recognized(
    #[case] line: &str,
    #[case] label: &str,
    #[case] text: &str,
) {
    let lines = label_lines(line, "\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].label, label);
    assert_eq!(lines[0].text, text);
}

#[rstest]
#[case("Strongly agree")]
#[case("Neither agree nor disagree")]
#[case("Strongly disagree")]
#[case("Blue")]
fn unlabeled_lines_fall_back_to_index(#[case] line: &str) {
    let lines = label_lines(line, "\n");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].label, "1");
    assert_eq!(lines[0].text, line);
}

#[test]
fn labeled_lines_debug_snapshot() {
    let lines = label_lines("r1. Red\nr2. Green\nOther, please specify ____", "\n");
    insta::assert_debug_snapshot!(lines, @r###"
    [
        LabeledLine {
            label: "1",
            text: "Red",
            extra: "",
        },
        LabeledLine {
            label: "2",
            text: "Green",
            extra: "",
        },
        LabeledLine {
            label: "3",
            text: "Other, please specify ",
            extra: " other=\"1\" openSize=\"20\" randomize=\"0\"",
        },
    ]
    "###);
}

#[test]
fn custom_delimiter_splits_fragments() {
    let options = CellOptions {
        tag: "choice".to_string(),
        prefix: "ch".to_string(),
        delimiter: ";".to_string(),
    };
    assert_eq!(
        transform("1. Daily;2. Weekly", &options),
        "  <choice label=\"ch1\">Daily</choice>\n  <choice label=\"ch2\">Weekly</choice>"
    );
}

#[test]
fn duplicate_labels_pass_through() {
    let lines = label_lines("r1. Once\nr1. Twice", "\n");
    assert_eq!(lines[0].label, "1");
    assert_eq!(lines[1].label, "1");
}
