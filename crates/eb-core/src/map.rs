use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::location::LocationId;

/// Locations directly reachable from `id`, in road order.
///
/// Road order decides which of several equally short paths the search
/// returns; callers should not rely on a particular one.
pub fn neighbors(id: LocationId) -> &'static [LocationId] {
    use LocationId::*;
    match id {
        I => &[II, III],
        II => &[I, IV, V],
        III => &[I, IV],
        IV => &[II, III, V, VI],
        V => &[II, IV, VII, VIII],
        VI => &[IV, VIII],
        VII => &[V, VIII],
        VIII => &[V, VI, VII],
    }
}

/// Whether a road leads directly from `from` to `to`.
pub fn is_adjacent(from: LocationId, to: LocationId) -> bool {
    neighbors(from).contains(&to)
}

/// The whole road graph, keyed by location.
pub fn connections() -> BTreeMap<LocationId, Vec<LocationId>> {
    LocationId::all()
        .iter()
        .map(|&id| (id, neighbors(id).to_vec()))
        .collect()
}

/// Breadth-first search for the shortest route from `from` to `to`.
///
/// The returned path includes both endpoints, so a path between neighbors
/// has length 2 and `find_path(a, a)` is `[a]`. An empty path means `to` is
/// unreachable.
pub fn find_path(from: LocationId, to: LocationId) -> Vec<LocationId> {
    let mut visited: HashMap<LocationId, Option<LocationId>> = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(from, None);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![to];
            let mut node = to;
            while let Some(&Some(prev)) = visited.get(&node) {
                path.push(prev);
                node = prev;
            }
            path.reverse();
            return path;
        }

        for &next in neighbors(current) {
            if !visited.contains_key(&next) {
                visited.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    Vec::new()
}

/// Number of roads between two locations, or `None` when unreachable.
pub fn calculate_distance(from: LocationId, to: LocationId) -> Option<u32> {
    if from == to {
        return Some(0);
    }
    let path = find_path(from, to);
    if path.is_empty() {
        None
    } else {
        Some(path.len() as u32 - 1)
    }
}
