//! Property-based tests for the Nama and Webography grammars.

use nama::nama::ast::{CaseItem, Inline};
use nama::{parse_document, parse_webography, render};
use proptest::prelude::*;

proptest! {
    /// Any printable, non-blank line is a valid title, recovered trimmed.
    #[test]
    fn titles_round_trip_trimmed(raw in "[ -~]{1,60}") {
        prop_assume!(!raw.trim().is_empty());
        let source = format!("title: {}\ncontent {{}}", raw);
        let doc = parse_document(&source).unwrap();
        prop_assert_eq!(doc.title, raw.trim());
    }

    /// Plain text made of unambiguous characters survives parse and render
    /// verbatim as a single coalesced node.
    #[test]
    fn plain_text_survives_parse_and_render(body in "[a-zA-Z0-9][a-zA-Z0-9 ,.!?']{0,40}") {
        let source = format!("title: t\ncontent {{ case(c) {{ text{{{}}} }} }}", body);
        let doc = parse_document(&source).unwrap();
        match &doc.content.cases[0].body[0] {
            CaseItem::Text(text) => {
                prop_assert_eq!(&text.inline, &vec![Inline::Plain { text: body.clone() }]);
            }
            other => prop_assert!(false, "expected text block, got {:?}", other),
        }
        let html = render(&doc).unwrap();
        prop_assert!(html.contains(&body));
    }

    /// Webography field values are captured verbatim.
    #[test]
    fn webography_values_round_trip(
        title in "[a-zA-Z0-9 .,:!-]{1,30}",
        link in "[a-zA-Z0-9:/.?=-]{1,30}",
        name in "[a-zA-Z0-9 .,-]{1,30}",
        date in "[a-zA-Z0-9 -]{1,20}",
    ) {
        let source = format!("T: {}\nL: {}\nN: {}\nD: {}\n", title, link, name, date);
        let web = parse_webography(&source).unwrap();
        prop_assert_eq!(web.entries.len(), 1);
        prop_assert_eq!(&web.entries[0].title, &title);
        prop_assert_eq!(&web.entries[0].link, &link);
        prop_assert_eq!(&web.entries[0].name, &name);
        prop_assert_eq!(&web.entries[0].date, &date);
    }
}
