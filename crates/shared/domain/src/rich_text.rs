//! Block-structured rich text (portable text) as stored by the content store.

use crate::check::or_default;
use folio_derive::content_model;

pub type RichText = Vec<Block>;

const TEXT_BLOCK: &str = "block";

#[content_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Block {
    /// `block` for text; anything else (embedded images, code widgets) is skipped when rendering.
    #[serde(rename = "_type", default = "text_block_kind")]
    pub kind: String,
    #[serde(default, deserialize_with = "or_default")]
    pub style: BlockStyle,
    pub list_item: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub children: Vec<Span>,
}

#[content_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Span {
    #[serde(default, deserialize_with = "or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "or_default")]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    /// Styles we don't render specially (`h5`, custom styles); shown as paragraphs.
    #[serde(other)]
    Other,
}

fn text_block_kind() -> String {
    TEXT_BLOCK.to_owned()
}

impl Block {
    /// Plain paragraph made of one unmarked span.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: text_block_kind(),
            style: BlockStyle::Normal,
            list_item: None,
            children: vec![Span { text: text.into(), marks: Vec::new() }],
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == TEXT_BLOCK
    }

    /// Concatenated span text, marks ignored.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }
}

/// All text blocks joined with blank lines. Used for summaries and shape checks.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks.iter().filter(|b| b.is_text()).map(Block::plain_text).collect::<Vec<_>>().join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_blocks_and_skips_unknown_styles_gracefully() {
        let raw = r#"[
            {"_type":"block","_key":"a","style":"h2","markDefs":[],"children":[{"_type":"span","text":"Hi","marks":["strong"]}]},
            {"_type":"image","_key":"b","asset":{"_ref":"image-x"}},
            {"_type":"block","children":[{"text":"plain"}]},
            {"_type":"block","style":"h6","children":[{"text":"tiny"}]}
        ]"#;
        let blocks: RichText = serde_json::from_str(raw).unwrap();

        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[3].style, BlockStyle::Other);
        assert_eq!(blocks[0].style, BlockStyle::H2);
        assert_eq!(blocks[0].children[0].marks, ["strong"]);
        assert!(!blocks[1].is_text());
        assert!(blocks[1].children.is_empty());
        assert_eq!(plain_text(&blocks), "Hi\n\nplain\n\ntiny");
    }
}
