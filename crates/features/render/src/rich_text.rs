use folio_domain::rich_text::{Block, BlockStyle, Span};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Paragraph,
    Heading(u8),
    Quote,
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StyledSpan {
    pub text: String,
    pub strong: bool,
    pub em: bool,
    pub code: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub kind: TextKind,
    pub spans: Vec<StyledSpan>,
}

/// Text blocks in order; embedded objects and blocks without text are dropped.
pub fn render_rich_text(blocks: &[Block]) -> Vec<TextBlock> {
    blocks
        .iter()
        .filter(|block| block.is_text())
        .map(|block| TextBlock { kind: kind_of(block), spans: block.children.iter().map(styled).collect() })
        .filter(|block| block.spans.iter().any(|span| !span.text.trim().is_empty()))
        .collect()
}

fn kind_of(block: &Block) -> TextKind {
    match block.list_item.as_deref() {
        Some("number") => return TextKind::Numbered,
        Some(_) => return TextKind::Bullet,
        None => {}
    }
    match block.style {
        BlockStyle::H1 => TextKind::Heading(1),
        BlockStyle::H2 => TextKind::Heading(2),
        BlockStyle::H3 => TextKind::Heading(3),
        BlockStyle::H4 => TextKind::Heading(4),
        BlockStyle::Blockquote => TextKind::Quote,
        BlockStyle::Normal | BlockStyle::Other => TextKind::Paragraph,
    }
}

fn styled(span: &Span) -> StyledSpan {
    let has = |mark: &str| span.marks.iter().any(|m| m == mark);
    StyledSpan { text: span.text.clone(), strong: has("strong"), em: has("em"), code: has("code") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_and_marks_are_mapped() {
        let blocks: Vec<Block> = serde_json::from_str(
            r#"[
                {"_type": "block", "style": "h2", "children": [{"text": "Hello"}]},
                {"_type": "block", "style": "normal", "children": [
                    {"text": "plain "}, {"text": "bold", "marks": ["strong", "em"]}
                ]},
                {"_type": "image", "asset": {"_ref": "image-x"}},
                {"_type": "block", "listItem": "bullet", "children": [{"text": "item"}]},
                {"_type": "block", "children": [{"text": "   "}]}
            ]"#,
        )
        .unwrap();

        let rendered = render_rich_text(&blocks);
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].kind, TextKind::Heading(2));
        assert!(rendered[1].spans[1].strong && rendered[1].spans[1].em);
        assert!(!rendered[1].spans[0].strong);
        assert_eq!(rendered[2].kind, TextKind::Bullet);
    }
}
