//! Navigation and text extraction over [`Element`] trees.

use super::element::Element;
use crate::config::RUBY_READING_TAG;

/// Find the first direct child with the given tag name.
///
/// # Examples
/// ```
/// use keiho_converter::xml::{find_child, Element};
///
/// let article = Element::parse("<Article><ArticleTitle>第一条</ArticleTitle></Article>").unwrap();
/// assert!(find_child(&article, "ArticleTitle").is_some());
/// assert!(find_child(&article, "ArticleCaption").is_none());
/// ```
pub fn find_child<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
    element.children.iter().find(|child| child.has_tag(tag))
}

/// Find all descendants with the given tag name, in document order.
///
/// `element` itself is never included, even if its tag matches.
pub fn find_descendants<'a>(
    element: &'a Element,
    tag: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    element.descendants().filter(move |e| e.has_tag(tag))
}

/// Concatenate the text of an element, leaving out ruby readings.
///
/// Produces the element's direct text followed, for every child in order, by
/// the child's own extracted text (unless the child is an `Rt` annotation)
/// and then the child's tail. No separators are inserted.
///
/// # Examples
/// ```
/// use keiho_converter::xml::{extract_text_without_annotations, Element};
///
/// let xml = "<Sentence>犯罪の<Ruby>教唆<Rt>きょうさ</Rt></Ruby>をした</Sentence>";
/// let sentence = Element::parse(xml).unwrap();
/// assert_eq!(extract_text_without_annotations(&sentence), "犯罪の教唆をした");
/// ```
pub fn extract_text_without_annotations(element: &Element) -> String {
    let mut text = String::new();
    push_text_without_annotations(element, &mut text);
    text
}

fn push_text_without_annotations(element: &Element, out: &mut String) {
    if let Some(text) = &element.text {
        out.push_str(text);
    }

    for child in &element.children {
        if !child.has_tag(RUBY_READING_TAG) {
            push_text_without_annotations(child, out);
        }
        if let Some(tail) = &child.tail {
            out.push_str(tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_child_is_direct_only() {
        let xml = "<Article><Paragraph><ArticleTitle>x</ArticleTitle></Paragraph></Article>";
        let article = Element::parse(xml).unwrap();
        assert!(find_child(&article, "ArticleTitle").is_none());
        assert!(find_child(&article, "Paragraph").is_some());
    }

    #[test]
    fn test_find_child_returns_first() {
        let xml = "<Article><ArticleTitle>一</ArticleTitle><ArticleTitle>二</ArticleTitle></Article>";
        let article = Element::parse(xml).unwrap();
        let title = find_child(&article, "ArticleTitle").unwrap();
        assert_eq!(title.text.as_deref(), Some("一"));
    }

    #[test]
    fn test_find_descendants_any_depth() {
        let xml = r"<Article>
            <Paragraph>
                <ParagraphSentence><Sentence>一</Sentence></ParagraphSentence>
                <Item><ItemSentence><Sentence>二</Sentence></ItemSentence></Item>
            </Paragraph>
        </Article>";
        let article = Element::parse(xml).unwrap();
        let texts: Vec<_> = find_descendants(&article, "Sentence")
            .filter_map(|s| s.text.as_deref())
            .collect();
        assert_eq!(texts, vec!["一", "二"]);
    }

    #[test]
    fn test_find_descendants_excludes_self() {
        let sentence = Element::parse("<Sentence>x</Sentence>").unwrap();
        assert_eq!(find_descendants(&sentence, "Sentence").count(), 0);
    }

    #[test]
    fn test_extract_keeps_nested_text_in_order() {
        let xml = "<Sentence>a<Line>b<QuoteStruct>c</QuoteStruct>d</Line>e</Sentence>";
        let sentence = Element::parse(xml).unwrap();
        assert_eq!(extract_text_without_annotations(&sentence), "abcde");
    }

    #[test]
    fn test_extract_skips_annotation_but_keeps_tail() {
        let sentence = Element::new("Sentence")
            .with_text("前")
            .with_child(
                Element::new("Ruby")
                    .with_text("漢字")
                    .with_child(
                        Element::new("Rt")
                            .with_text("かんじ")
                            .with_child(Element::new("Sub").with_text("深い"))
                            .with_tail("尾"),
                    )
                    .with_tail("後"),
            );

        let text = extract_text_without_annotations(&sentence);
        assert_eq!(text, "前漢字尾後");
        assert!(!text.contains("かんじ"));
        assert!(!text.contains("深い"));
    }

    #[test]
    fn test_extract_annotation_root_still_extracted() {
        // Only child annotations are skipped
        let rt = Element::parse("<Rt>よみ</Rt>").unwrap();
        assert_eq!(extract_text_without_annotations(&rt), "よみ");
    }

    #[test]
    fn test_extract_preserves_whitespace() {
        let sentence = Element::parse("<Sentence>  a \n <b>x</b>\t</Sentence>").unwrap();
        assert_eq!(extract_text_without_annotations(&sentence), "  a \n x\t");
    }

    #[test]
    fn test_extract_empty_element() {
        assert_eq!(extract_text_without_annotations(&Element::new("Sentence")), "");
    }
}
