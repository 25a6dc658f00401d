//! Plain-text statute parsing.
//!
//! Handles statutes distributed as text, where sections are separated by
//! blank lines:
//!
//! ```text
//! 前文
//!
//! 日本国民は、……
//!
//! 第一章　天皇
//!
//! 〔天皇の地位・国民主権〕
//!
//! 第一条　天皇は、日本国の象徴であり……
//! ```
//!
//! A `〔…〕` caption is consumed by the article that follows it; later
//! articles without their own caption get an empty one, not the previous one.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::Record;

/// Title used for the preamble record.
pub const PREAMBLE_TITLE: &str = "前文";

/// Bracketed caption line, e.g. "〔天皇の地位・国民主権〕".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CAPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^〔(.+)〕$").expect("valid regex"));

/// Chapter heading, e.g. "第一章　天皇".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^第[一二三四五六七八九十百千零〇]+章").expect("valid regex"));

/// Article heading followed by a full-width space and the first paragraph.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(第[一二三四五六七八九十百千零〇]+条)　(.+)").expect("valid regex")
});

/// Where the parser is relative to the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Root,
    Chapter,
    Article,
}

/// Parse plain statute text into records.
///
/// Sections that follow a chapter heading but precede the next article are
/// not part of any record. A caption applies only to the next article.
///
/// # Examples
/// ```
/// use keiho_converter::plaintext::parse_plaintext;
///
/// let text = "〔国民の要件〕\n\n第十条　日本国民たる要件は、法律でこれを定める。";
/// let records = parse_plaintext(text);
/// assert_eq!(records[0].title, "第十条");
/// assert_eq!(records[0].caption, "国民の要件");
/// ```
pub fn parse_plaintext(text: &str) -> Vec<Record> {
    let text = text.replace("\r\n", "\n");

    let mut records = Vec::new();
    let mut state = State::Root;
    let mut current: Option<Record> = None;
    let mut pending_caption: Option<String> = None;

    for section in text.split("\n\n").map(str::trim).filter(|s| !s.is_empty()) {
        if section == PREAMBLE_TITLE {
            records.extend(current.take());
            current = Some(Record::new(PREAMBLE_TITLE, "", ""));
            state = State::Article;
        } else if let Some(caps) = CAPTION_PATTERN.captures(section) {
            pending_caption = Some(caps[1].to_string());
        } else if CHAPTER_PATTERN.is_match(section) {
            debug!(heading = section, "Chapter heading");
            state = State::Chapter;
        } else if let Some(caps) = ARTICLE_PATTERN.captures(section) {
            records.extend(current.take());
            current = Some(Record::new(
                &caps[1],
                pending_caption.take().unwrap_or_default(),
                caps[2].trim(),
            ));
            state = State::Article;
        } else if state == State::Article {
            if let Some(record) = current.as_mut() {
                record.text.push('\n');
                record.text.push_str(section);
                record.text = record.text.trim().to_string();
            }
        }
    }

    records.extend(current);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "日本国憲法\n\n\
        前文\n\n\
        日本国民は、正当に選挙された国会における代表者を通じて行動し、\n\n\
        そもそも国政は、国民の厳粛な信託によるものであつて、\n\n\
        第一章　天皇\n\n\
        〔天皇の地位・国民主権〕\n\n\
        第一条　天皇は、日本国の象徴であり日本国民統合の象徴であつて、\n\n\
        第二条　皇位は、世襲のものであつて、\n\n\
        第二章　戦争の放棄\n\n\
        〔戦争の放棄、戦力及び交戦権の否認〕\n\n\
        第九条　日本国民は、正義と秩序を基調とする国際平和を誠実に希求し、\n\n\
        ２　前項の目的を達するため、陸海空軍その他の戦力は、これを保持しない。";

    #[test]
    fn test_parse_sample() {
        let records = parse_plaintext(SAMPLE);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["前文", "第一条", "第二条", "第九条"]);
    }

    #[test]
    fn test_preamble_collects_following_sections() {
        let records = parse_plaintext(SAMPLE);
        assert_eq!(
            records[0],
            Record::new(
                "前文",
                "",
                "日本国民は、正当に選挙された国会における代表者を通じて行動し、\n\
                 そもそも国政は、国民の厳粛な信託によるものであつて、"
            )
        );
    }

    #[test]
    fn test_caption_applies_to_next_article_only() {
        let records = parse_plaintext(SAMPLE);
        assert_eq!(records[1].caption, "天皇の地位・国民主権");
        assert_eq!(records[2].caption, "");
        assert_eq!(records[3].caption, "戦争の放棄、戦力及び交戦権の否認");
    }

    #[test]
    fn test_article_paragraphs_joined() {
        let records = parse_plaintext(SAMPLE);
        assert_eq!(
            records[3].text,
            "日本国民は、正義と秩序を基調とする国際平和を誠実に希求し、\n\
             ２　前項の目的を達するため、陸海空軍その他の戦力は、これを保持しない。"
        );
    }

    #[test]
    fn test_sections_after_chapter_heading_dropped() {
        let text = "第一条　本文。\n\n第二章　雑則\n\n章の説明。\n\n第二条　次。";
        let records = parse_plaintext(text);
        assert_eq!(records[0].text, "本文。");
        assert_eq!(records[1].text, "次。");
    }

    #[test]
    fn test_text_before_any_article_ignored() {
        let records = parse_plaintext("表題\n\n説明文");
        assert!(records.is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let records = parse_plaintext("第三条　一行目。\r\n\r\n二行目。");
        assert_eq!(records, vec![Record::new("第三条", "", "一行目。\n二行目。")]);
    }

    #[test]
    fn test_article_requires_full_width_space() {
        let records = parse_plaintext("第四条 半角スペース。");
        assert!(records.is_empty());
    }

    #[test]
    fn test_bracket_inside_body_is_not_caption() {
        let text = "第五条　本文。\n\n〔注〕の後に続く段落。";
        let records = parse_plaintext(text);
        assert_eq!(records[0].text, "本文。\n〔注〕の後に続く段落。");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_plaintext("").is_empty());
    }
}
