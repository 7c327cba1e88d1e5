//! Center connectivity test used by type and authority classification.

use crate::bodygraph::Channel;
use crate::center::{Center, CenterSet};

/// Whether `centers` count as connected through the active `channels`.
///
/// - No channels, or fewer than two centers: `false`.
/// - Two centers: some channel has one end in each.
/// - More: at least `k - 1` of the `k` requested centers are "matched",
///   i.e. are an endpoint of a channel whose other end is also requested.
///
/// The multi-center rule is an endpoint count, not a reachability search.
pub fn connected(channels: &[Channel], centers: &[Center]) -> bool {
    if channels.is_empty() || centers.len() < 2 {
        return false;
    }
    if let [a, b] = centers {
        return channels.iter().any(|c| c.joins(*a, *b));
    }

    let requested: CenterSet = centers.iter().copied().collect();
    let matched = requested
        .iter()
        .filter(|&center| {
            channels
                .iter()
                .filter_map(|c| c.other_end(center))
                .any(|other| requested.contains(other))
        })
        .count();
    matched + 1 >= requested.len()
}
