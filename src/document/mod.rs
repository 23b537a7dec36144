//! Content model: block segmentation and joining

mod block;

pub use block::{strip_tags, word_count, Block};

use regex::Regex;
use std::sync::OnceLock;

/// Separator placed between blocks after normalization
pub const BLOCK_SEPARATOR: &str = "\r\n\r\n";

fn paragraph_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<p>(.+?)</p>").expect("paragraph pattern is valid"))
}

fn line_break_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br(\s*/)?>").expect("line break pattern is valid"))
}

/// Replace paragraph and line-break markup with [`BLOCK_SEPARATOR`]
pub fn normalize(content: &str) -> String {
    let replacement = format!("${{1}}{BLOCK_SEPARATOR}");
    let content = paragraph_tag().replace_all(content, replacement.as_str());
    line_break_tag()
        .replace_all(&content, BLOCK_SEPARATOR)
        .into_owned()
}

/// Ordered sequence of paragraph-level blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphSequence {
    blocks: Vec<Block>,
    /// Number of separators seen while segmenting
    separators: usize,
}

impl ParagraphSequence {
    /// Build a sequence directly from block texts
    pub fn from_blocks<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let blocks: Vec<Block> = blocks.into_iter().map(|b| Block::new(b.into())).collect();
        let separators = blocks.len().saturating_sub(1);
        Self { blocks, separators }
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of separators found in the normalized content
    pub fn separator_count(&self) -> usize {
        self.separators
    }

    /// Whether at least one marker could be placed
    pub fn is_splittable(&self) -> bool {
        self.separators > 0 && self.blocks.len() >= 2
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    /// Append `marker` to the block at `index`
    ///
    /// Returns false when the index is out of range.
    pub fn mark(&mut self, index: usize, marker: &str) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) => {
                block.push_marker(marker);
                true
            }
            None => false,
        }
    }

    /// Re-assemble the blocks with [`BLOCK_SEPARATOR`]
    pub fn join(&self) -> String {
        let capacity = self.blocks.iter().map(Block::len).sum::<usize>()
            + self.blocks.len().saturating_sub(1) * BLOCK_SEPARATOR.len();
        let mut out = String::with_capacity(capacity);
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push_str(BLOCK_SEPARATOR);
            }
            out.push_str(block.text());
        }
        out
    }
}

/// Split content into blocks on paragraph and line-break boundaries
pub fn segment(content: &str) -> ParagraphSequence {
    let normalized = normalize(content);
    let separators = normalized.matches(BLOCK_SEPARATOR).count();
    let blocks = normalized
        .split(BLOCK_SEPARATOR)
        .map(|b| Block::new(b.to_string()))
        .collect();

    ParagraphSequence { blocks, separators }
}

/// Re-assemble a sequence into a single string
pub fn join(blocks: &ParagraphSequence) -> String {
    blocks.join()
}
