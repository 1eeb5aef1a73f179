//! End-to-end scenario: a buffer host with several selections, one of them
//! broken. The broken selection is reported and left alone; the others are
//! rewritten in place.

use survml::survml::cells::CellOptions;
use survml::survml::error::TransformError;
use survml::survml::host::{apply, BufferHost, TextRange};
use survml::survml::pipeline::Pipeline;
use survml::survml::question::QuestionOptions;

#[test]
fn failed_selection_is_isolated() {
    let first = "q1) <row label=\"r1\">Yes</row>";
    let broken = "*** not a question ***";
    let second = "q2) <row label=\"r1\">No</row>";
    let buffer = format!("{}\n\n{}\n\n{}", first, broken, second);

    let ranges = vec![
        TextRange::new(0, first.len()),
        TextRange::new(first.len() + 2, first.len() + 2 + broken.len()),
        TextRange::new(first.len() + 2 + broken.len() + 2, buffer.len()),
    ];
    let mut host = BufferHost::new(buffer, ranges);

    let outcomes = apply(&mut host, &Pipeline::Question(QuestionOptions::default()));

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0], Ok(()));
    assert_eq!(outcomes[1], Err(TransformError::MissingLabel));
    assert_eq!(outcomes[2], Ok(()));

    // The broken selection's text survives untouched between the rewrites
    assert!(host.buffer().contains(broken));
    assert!(host.buffer().contains("<radio \n  label=\"q1\">"));
    assert!(host.buffer().contains("<radio \n  label=\"q2\">"));
    assert!(!host.buffer().contains("q1) <row"));
}

#[test]
fn whole_buffer_cells_rewrite() {
    let mut host = BufferHost::spanning("1. Yes\n2. No\nOther, please specify ____");
    let outcomes = apply(&mut host, &Pipeline::Cells(CellOptions::default()));

    assert_eq!(outcomes, vec![Ok(())]);
    assert_eq!(
        host.buffer(),
        "  <row label=\"r1\">Yes</row>\n\
         \x20 <row label=\"r2\">No</row>\n\
         \x20 <row label=\"r3\" other=\"1\" openSize=\"20\" randomize=\"0\">Other, please specify </row>"
    );
}

#[test]
fn selections_are_processed_in_host_order() {
    let buffer = "1. A\n--\n1. B";
    let ranges = vec![TextRange::new(0, 4), TextRange::new(8, 12)];
    let mut host = BufferHost::new(buffer, ranges);

    apply(&mut host, &Pipeline::Cells(CellOptions::default()));

    assert_eq!(
        host.buffer(),
        "  <row label=\"r1\">A</row>\n--\n  <row label=\"r1\">B</row>"
    );
}
