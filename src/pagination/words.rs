//! Break planning by approximate words per page

use super::BreakPlan;
use crate::document::Block;

/// Plan a marker after each block where the running word count reaches `words_per_page`
///
/// The counter resets after every break. Reaching the target on the final
/// block never emits a trailing marker.
pub fn plan_by_words(blocks: &[Block], words_per_page: usize) -> BreakPlan {
    let mut plan = BreakPlan::new();
    if words_per_page == 0 || blocks.len() < 2 {
        return plan;
    }

    let last = blocks.len() - 1;
    let mut word_counter = 0;

    for (index, block) in blocks.iter().enumerate() {
        word_counter += block.word_count();
        if word_counter < words_per_page {
            continue;
        }
        if index < last {
            plan.push(index);
        }
        word_counter = 0;
    }

    plan
}
