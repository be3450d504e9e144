//! Block-level rules: title, text blocks, sources, cases, and the
//! document rule itself.
//!
//! Whitespace between blocks is insignificant and includes newlines, the
//! one exception being the title line, which must be terminated by `\n`.

use chumsky::prelude::*;

use super::combinators::{padding, url_chars, ParserError};
use super::inlines::inline_run;
use crate::nama::ast::{Case, CaseItem, Content, Document, Sources, Text};

/// `title:` followed by the rest of the line and a mandatory newline.
/// Only ever consumes a single line; the captured title is trimmed.
pub(crate) fn title() -> impl Parser<char, String, Error = ParserError> + Clone {
    just("title:")
        .ignore_then(padding())
        .ignore_then(
            filter(|c: &char| *c != '\n')
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .then_ignore(just('\n'))
        .map(|raw| raw.trim().to_string())
}

/// `text { ...inline... }` with at least one inline node.
pub(crate) fn text_block() -> impl Parser<char, Text, Error = ParserError> + Clone {
    just("text")
        .ignore_then(padding())
        .ignore_then(just('{'))
        .ignore_then(padding())
        .ignore_then(inline_run())
        .then_ignore(padding())
        .then_ignore(just('}'))
        .map(Text::new)
}

/// `sources {}` or `sources {{footnotes}}`. No free-form body is allowed.
pub(crate) fn sources() -> impl Parser<char, Sources, Error = ParserError> + Clone {
    just("sources")
        .ignore_then(padding())
        .ignore_then(just('{'))
        .ignore_then(padding())
        .ignore_then(just("{footnotes}").ignore_then(padding()).or_not())
        .then_ignore(just('}'))
        .map(|footnotes| Sources {
            footnotes: footnotes.is_some(),
        })
}

/// `case(name)` with an optional `(url)` tag and a braced body mixing text
/// blocks, nested cases, and sources markers in source order. Nesting depth
/// is unbounded.
pub(crate) fn case_statement() -> impl Parser<char, Case, Error = ParserError> + Clone {
    recursive(|case_stmt| {
        let body_item = choice((
            text_block().map(CaseItem::Text),
            case_stmt.map(CaseItem::Case),
            sources().map(CaseItem::Sources),
        ));

        just("case(")
            .ignore_then(
                filter(|c: &char| *c != ')')
                    .repeated()
                    .at_least(1)
                    .collect::<String>(),
            )
            .then_ignore(just(')'))
            .then(url_chars().delimited_by(just('('), just(')')).or_not())
            .then_ignore(padding())
            .then_ignore(just('{'))
            .then(padding().ignore_then(body_item).repeated())
            .then_ignore(padding())
            .then_ignore(just('}'))
            .map(|((name, url), body)| Case::new(name, url, body))
    })
}

/// `content { ...cases... }`. Empty content is valid.
pub(crate) fn content() -> impl Parser<char, Content, Error = ParserError> + Clone {
    just("content")
        .ignore_then(padding())
        .ignore_then(just('{'))
        .ignore_then(padding())
        .ignore_then(case_statement().then_ignore(padding()).repeated())
        .then_ignore(just('}'))
        .map(Content::new)
}

/// The root rule: title, optional `!nlp` flag, content, end of input.
pub(crate) fn document() -> impl Parser<char, Document, Error = ParserError> + Clone {
    padding()
        .ignore_then(title())
        .then(padding().ignore_then(just("!nlp").or_not()))
        .then(padding().ignore_then(content()))
        .then_ignore(padding())
        .then_ignore(end())
        .map(|((title, nlp), content)| Document::new(title, nlp.is_some(), content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nama::ast::Inline;

    #[test]
    fn title_is_trimmed() {
        let parsed = title().parse("title:  test  \n").unwrap();
        assert_eq!(parsed, "test");
    }

    #[test]
    fn title_requires_trailing_newline() {
        assert!(title().parse("title: test").is_err());
    }

    #[test]
    fn title_requires_at_least_one_character() {
        assert!(title().then_ignore(end()).parse("title:\n").is_err());
    }

    #[test]
    fn title_consumes_a_single_line_only() {
        let parsed = title()
            .then_ignore(just("leftover"))
            .then_ignore(end())
            .parse("title: test\nleftover")
            .unwrap();
        assert_eq!(parsed, "test");
    }

    #[test]
    fn case_with_text_body() {
        let case = case_statement()
            .then_ignore(end())
            .parse("case(hello){text{I exist!}}")
            .unwrap();
        assert_eq!(case.name, "hello");
        assert_eq!(case.url, None);
        assert_eq!(
            case.body,
            vec![CaseItem::Text(Text::new(vec![Inline::Plain {
                text: "I exist!".to_string()
            }]))]
        );
    }

    #[test]
    fn nested_cases_preserve_depth() {
        let case = case_statement()
            .then_ignore(end())
            .parse("case(outer){case(inner){text{hello}}}")
            .unwrap();
        assert_eq!(case.name, "outer");
        match &case.body[0] {
            CaseItem::Case(inner) => {
                assert_eq!(inner.name, "inner");
                assert!(matches!(inner.body[0], CaseItem::Text(_)));
            }
            other => panic!("expected nested case, got {:?}", other),
        }
    }

    #[test]
    fn case_url_tag_is_captured() {
        let case = case_statement()
            .then_ignore(end())
            .parse("case(hello)(https://example.com){text{hi}}")
            .unwrap();
        assert_eq!(case.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn case_body_may_be_empty() {
        let case = case_statement()
            .then_ignore(end())
            .parse("case(hollow){}")
            .unwrap();
        assert!(case.body.is_empty());
    }

    #[test]
    fn case_name_may_not_be_empty() {
        assert!(case_statement().parse("case(){text{x}}").is_err());
    }

    #[test]
    fn sources_footnotes_flag() {
        assert!(!sources().parse("sources{}").unwrap().footnotes);
        assert!(sources().parse("sources{ {footnotes} }").unwrap().footnotes);
        assert!(sources().parse("sources{{footnotes}}").unwrap().footnotes);
    }

    #[test]
    fn sources_rejects_free_form_body() {
        assert!(sources()
            .then_ignore(end())
            .parse("sources{see chapter 4}")
            .is_err());
    }

    #[test]
    fn empty_content_is_valid() {
        let parsed = content().then_ignore(end()).parse("content {}").unwrap();
        assert!(parsed.cases.is_empty());
    }

    #[test]
    fn document_accepts_the_nlp_flag() {
        let doc = document()
            .parse("title: test\n!nlp\ncontent {}")
            .unwrap();
        assert!(doc.nlp);
        assert_eq!(doc.title, "test");

        let doc = document().parse("title: test\ncontent {}").unwrap();
        assert!(!doc.nlp);
    }

    #[test]
    fn document_rejects_trailing_garbage() {
        assert!(document().parse("title: test\ncontent {} trailing").is_err());
    }
}
