use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MalformedContentError;

/// Text shown in place of content that could not be decoded.
pub const PLACEHOLDER_TEXT: &str = "Content not available";

const BLOCK_KEY_LEN: usize = 5;

/// Structured rich text: blocks in reading order plus the entities they reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    #[serde(rename = "entityMap", default)]
    pub entities: BTreeMap<EntityKey, Entity>,
}

/// One paragraph-level unit of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub key: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: u32,
    #[serde(rename = "inlineStyleRanges", default)]
    pub style_ranges: Vec<StyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<EntityRange>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Inline style applied to `length` UTF-16 units starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

/// Inline reference to an entry of [`Document::entities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: EntityKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(pub u32);

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entity data, e.g. a link and its URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub mutability: Mutability,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Entity {
    pub fn link(url: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert("url".to_string(), Value::String(url.into()));
        Self {
            entity_type: "LINK".to_string(),
            mutability: Mutability::Mutable,
            data,
        }
    }

    /// Link target, if this entity carries one.
    pub fn url(&self) -> Option<&str> {
        self.data
            .get("url")
            .or_else(|| self.data.get("href"))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mutability {
    #[default]
    Mutable,
    Immutable,
    Segmented,
}

/// Paragraph kind. Unknown kinds are carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    #[default]
    Unstyled,
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    CodeBlock,
    Atomic,
    Other(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::Paragraph => "paragraph",
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::HeaderFour => "header-four",
            BlockType::HeaderFive => "header-five",
            BlockType::HeaderSix => "header-six",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::Blockquote => "blockquote",
            BlockType::CodeBlock => "code-block",
            BlockType::Atomic => "atomic",
            BlockType::Other(name) => name,
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            BlockType::UnorderedListItem | BlockType::OrderedListItem
        )
    }
}

impl From<String> for BlockType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "unstyled" => BlockType::Unstyled,
            "paragraph" => BlockType::Paragraph,
            "header-one" => BlockType::HeaderOne,
            "header-two" => BlockType::HeaderTwo,
            "header-three" => BlockType::HeaderThree,
            "header-four" => BlockType::HeaderFour,
            "header-five" => BlockType::HeaderFive,
            "header-six" => BlockType::HeaderSix,
            "unordered-list-item" => BlockType::UnorderedListItem,
            "ordered-list-item" => BlockType::OrderedListItem,
            "blockquote" => BlockType::Blockquote,
            "code-block" => BlockType::CodeBlock,
            "atomic" => BlockType::Atomic,
            _ => BlockType::Other(name),
        }
    }
}

impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Inline style name. Unknown styles are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Other(String),
}

impl InlineStyle {
    pub fn as_str(&self) -> &str {
        match self {
            InlineStyle::Bold => "BOLD",
            InlineStyle::Italic => "ITALIC",
            InlineStyle::Underline => "UNDERLINE",
            InlineStyle::Code => "CODE",
            InlineStyle::Strikethrough => "STRIKETHROUGH",
            InlineStyle::Other(name) => name,
        }
    }
}

impl From<String> for InlineStyle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "BOLD" => InlineStyle::Bold,
            "ITALIC" => InlineStyle::Italic,
            "UNDERLINE" => InlineStyle::Underline,
            "CODE" => InlineStyle::Code,
            "STRIKETHROUGH" => InlineStyle::Strikethrough,
            _ => InlineStyle::Other(name),
        }
    }
}

impl From<InlineStyle> for String {
    fn from(style: InlineStyle) -> Self {
        match style {
            InlineStyle::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl Block {
    /// Create an unstyled block with no inline ranges.
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            block_type: BlockType::Unstyled,
            depth: 0,
            style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
            data: Map::new(),
        }
    }

    pub fn with_type(mut self, block_type: BlockType) -> Self {
        self.block_type = block_type;
        self
    }

    pub fn with_style(mut self, offset: usize, length: usize, style: InlineStyle) -> Self {
        self.style_ranges.push(StyleRange {
            offset,
            length,
            style,
        });
        self
    }

    pub fn with_entity(mut self, offset: usize, length: usize, key: EntityKey) -> Self {
        self.entity_ranges.push(EntityRange {
            offset,
            length,
            key,
        });
        self
    }

    /// Text length in UTF-16 code units, the unit range offsets are measured in.
    pub fn text_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    fn check_range(&self, offset: usize, length: usize) -> Result<(), MalformedContentError> {
        let text_len = self.text_len();
        match offset.checked_add(length) {
            Some(end) if end <= text_len => Ok(()),
            _ => Err(MalformedContentError::RangeOutOfBounds {
                block_key: self.key.clone(),
                offset,
                length,
                text_len,
            }),
        }
    }
}

impl Document {
    pub fn new(blocks: Vec<Block>, entities: BTreeMap<EntityKey, Entity>) -> Self {
        Self { blocks, entities }
    }

    /// A document holding a single empty unstyled block.
    pub fn empty() -> Self {
        Self::new(vec![Block::new(new_block_key(&HashSet::new()), "")], BTreeMap::new())
    }

    /// One unstyled block per line of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut keys = HashSet::new();
        let blocks = text
            .split('\n')
            .map(|line| {
                let key = new_block_key(&keys);
                keys.insert(key.clone());
                Block::new(key, line)
            })
            .collect();
        Self::new(blocks, BTreeMap::new())
    }

    /// The document shown when stored content cannot be decoded.
    pub fn placeholder() -> Self {
        Self::new(vec![Block::new("placeholder", PLACEHOLDER_TEXT)], BTreeMap::new())
    }

    /// True iff no block carries any text.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|block| block.text.is_empty())
    }

    /// Check the structural invariants: at least one block, unique block
    /// keys, every range inside its block and every entity reference resolvable.
    pub fn validate(&self) -> Result<(), MalformedContentError> {
        if self.blocks.is_empty() {
            return Err(MalformedContentError::NoBlocks);
        }

        let mut seen = HashSet::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if !seen.insert(block.key.as_str()) {
                return Err(MalformedContentError::DuplicateBlockKey(block.key.clone()));
            }

            for range in &block.style_ranges {
                block.check_range(range.offset, range.length)?;
            }

            for range in &block.entity_ranges {
                block.check_range(range.offset, range.length)?;
                if !self.entities.contains_key(&range.key) {
                    return Err(MalformedContentError::MissingEntity {
                        block_key: block.key.clone(),
                        entity_key: range.key,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Random short block key not present in `taken`.
fn new_block_key(taken: &HashSet<String>) -> String {
    loop {
        let key: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(BLOCK_KEY_LEN)
            .collect();
        if !taken.contains(&key) {
            return key;
        }
    }
}
