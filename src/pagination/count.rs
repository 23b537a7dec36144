//! Break planning by target page count

use super::BreakPlan;

/// Plan markers that split `block_count` blocks into roughly `target_pages` pages
///
/// The caller clamps `target_pages` to `[2, max_allowed]`. Markers land on
/// multiples of `round(n / target_pages)`; when more pages are requested than
/// there are blocks, every block but the last gets one. When the block count is
/// exactly one more than the target the counter starts at 2 so the last page
/// doesn't collapse to a single trailing block.
pub fn plan_by_count(block_count: usize, target_pages: usize) -> BreakPlan {
    let mut plan = BreakPlan::new();
    if block_count < 2 || target_pages < 2 {
        return plan;
    }

    let mut step = (block_count as f64 / target_pages as f64).round() as usize;
    if target_pages > block_count {
        step = 1;
    }

    let mut i = if block_count - 1 == target_pages { 2 } else { 1 };

    // 1-indexed positions, never the final block
    for position in 1..block_count {
        if position == i * step {
            plan.push(position - 1);
            i += 1;
        }
    }

    plan
}
