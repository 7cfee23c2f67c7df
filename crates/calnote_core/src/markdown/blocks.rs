//! Heading-delimited content blocks.
//!
//! A heading line is one or more `#` followed by whitespace and text. A block
//! runs from its heading line up to the next heading line of any level, or to
//! end of text. Text before the first heading belongs to no block.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:\s|$)").expect("valid heading date regex")
});

/// One heading plus the verbatim text beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Number of leading `#` characters.
    pub level: usize,
    /// Heading text, trimmed.
    pub heading: String,
    /// Exact source text between this heading line and the next heading.
    pub body: String,
}

impl ContentBlock {
    /// Body limited to its first `max_lines` lines.
    pub fn clamped_body(&self, max_lines: usize) -> &str {
        clamp_lines(&self.body, max_lines)
    }

    /// Leading `YYYY-MM-DD` of the heading, if present.
    pub fn heading_date(&self) -> Option<&str> {
        HEADING_DATE_RE
            .captures(&self.heading)
            .and_then(|caps| caps.get(1))
            .map(|date| date.as_str())
    }
}

/// Splits `text` into blocks in document order.
pub fn extract_blocks(text: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(usize, String, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some((level, heading)) = parse_heading(line) else {
            continue;
        };
        if let Some((level, heading, body_start)) = current.take() {
            blocks.push(ContentBlock {
                level,
                heading,
                body: text[body_start..line_start].to_string(),
            });
        }
        current = Some((level, heading.to_string(), offset));
    }

    if let Some((level, heading, body_start)) = current {
        blocks.push(ContentBlock {
            level,
            heading,
            body: text[body_start..].to_string(),
        });
    }
    blocks
}

/// First block whose trimmed heading equals `heading`.
pub fn find_block_by_heading<'a>(
    blocks: &'a [ContentBlock],
    heading: &str,
) -> Option<&'a ContentBlock> {
    let heading = heading.trim();
    blocks.iter().find(|block| block.heading == heading)
}

/// First `max_lines` lines of `text`, without the final line break.
pub fn clamp_lines(text: &str, max_lines: usize) -> &str {
    if max_lines == 0 {
        return "";
    }
    match text.match_indices('\n').nth(max_lines - 1) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let line = line
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line);
    let level = line.bytes().take_while(|byte| *byte == b'#').count();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(|ch: char| ch.is_whitespace()) {
        return None;
    }
    let heading = rest.trim();
    if heading.is_empty() {
        return None;
    }
    Some((level, heading))
}

#[cfg(test)]
mod tests {
    use super::{clamp_lines, extract_blocks, find_block_by_heading, parse_heading};

    #[test]
    fn heading_needs_space_after_hashes() {
        assert_eq!(parse_heading("## Plan\n"), Some((2, "Plan")));
        assert_eq!(parse_heading("#\tTabbed  \r\n"), Some((1, "Tabbed")));
        assert_eq!(parse_heading("#tag line\n"), None);
        assert_eq!(parse_heading("#   \n"), None);
        assert_eq!(parse_heading("text # not heading"), None);
    }

    #[test]
    fn preamble_is_ignored_and_bodies_are_verbatim() {
        let text = "intro\n# A\nline 1\n\n## B\n#tag\nline 2";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].heading, "A");
        assert_eq!(blocks[0].body, "line 1\n\n");
        assert_eq!(blocks[1].level, 2);
        assert_eq!(blocks[1].body, "#tag\nline 2");
    }

    #[test]
    fn first_matching_heading_wins() {
        let blocks = extract_blocks("# Mon\nfirst\n# Mon\nsecond\n");
        let found = find_block_by_heading(&blocks, " Mon ").unwrap();
        assert_eq!(found.body, "first\n");
    }

    #[test]
    fn clamp_keeps_leading_lines() {
        assert_eq!(clamp_lines("a\nb\nc\n", 2), "a\nb");
        assert_eq!(clamp_lines("a\nb", 5), "a\nb");
        assert_eq!(clamp_lines("a\nb", 0), "");
    }

    #[test]
    fn heading_date_requires_separator() {
        let blocks = extract_blocks("# 2024-03-15 Friday\n# 2024-03-15x\n# 2024-03-16\n");
        assert_eq!(blocks[0].heading_date(), Some("2024-03-15"));
        assert_eq!(blocks[1].heading_date(), None);
        assert_eq!(blocks[2].heading_date(), Some("2024-03-16"));
    }
}
