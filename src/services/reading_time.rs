use crate::models::blog::Block;

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, never less than one.
pub fn estimate_minutes(blocks: &[Block]) -> u32 {
    let text = blocks
        .iter()
        .filter_map(|block| match block {
            Block::Text { content } => Some(content.as_str()),
            Block::Image { .. } => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    minutes.max(1) as u32
}
