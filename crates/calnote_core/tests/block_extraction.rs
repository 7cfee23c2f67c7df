use calnote_core::{extract_blocks, find_block_by_heading};

const NOTE: &str = "\
## 2024-03-15 Friday
Morning run

- [ ] errands
### Reading
#tag-line stays in body
Chapter 3
## Empty
## Last
no trailing newline";

#[test]
fn blocks_reproduce_every_line_once_in_order() {
    let blocks = extract_blocks(NOTE);
    assert_eq!(blocks.len(), 4);

    let rebuilt: String = blocks
        .iter()
        .map(|block| format!("{} {}\n{}", "#".repeat(block.level), block.heading, block.body))
        .collect();
    assert_eq!(rebuilt, NOTE);
    assert!(blocks.iter().all(|block| !block.body.contains("\n## ")));
}

#[test]
fn empty_section_has_empty_body() {
    let blocks = extract_blocks(NOTE);
    let empty = find_block_by_heading(&blocks, "Empty").unwrap();
    assert_eq!(empty.body, "");
}

#[test]
fn lookup_is_exact() {
    let blocks = extract_blocks(NOTE);
    assert!(find_block_by_heading(&blocks, "2024-03-15").is_none());
    assert_eq!(
        find_block_by_heading(&blocks, "Reading").unwrap().body,
        "#tag-line stays in body\nChapter 3\n"
    );
    assert_eq!(
        find_block_by_heading(&blocks, "Last").unwrap().clamped_body(1),
        "no trailing newline"
    );
}

#[test]
fn text_without_headings_has_no_blocks() {
    assert!(extract_blocks("").is_empty());
    assert!(extract_blocks("just text\n#hashtag\n").is_empty());
}

#[test]
fn crlf_line_endings_are_preserved_in_bodies() {
    let blocks = extract_blocks("## A\r\nline\r\n## B\r\n");
    assert_eq!(blocks[0].heading, "A");
    assert_eq!(blocks[0].body, "line\r\n");
    assert_eq!(blocks[1].heading, "B");
}
