use super::graph::Graph;
use crate::constants::MAX_FRONTIER_EXPANSIONS;
use crate::models::RoutePath;
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet};

/// Frontier entry for the shortest-path search. The derived `Ord` compares
/// fields in declaration order, so equal-distance entries tie-break on node
/// name and then path, keeping pop order deterministic for a fixed graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    distance_m: u32,
    node: String,
    path: Vec<String>,
    route_ids: Vec<String>,
}

/// Dijkstra over non-negative integer edge weights, with lazy deletion:
/// a node's distance is final the first time it is popped, and stale heap
/// entries for finalized nodes are discarded.
///
/// Returns `None` when `start` has no incident edges (and differs from
/// `end`) or when the frontier exhausts without reaching `end`. Asking for
/// `start == end` yields the degenerate single-node path at distance 0.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Option<RoutePath> {
    if !graph.contains(start) && start != end {
        return None;
    }

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(FrontierEntry {
        distance_m: 0,
        node: start.to_string(),
        path: vec![start.to_string()],
        route_ids: Vec::new(),
    }));
    let mut visited: HashSet<String> = HashSet::new();

    while let Some(Reverse(entry)) = heap.pop() {
        if !visited.insert(entry.node.clone()) {
            continue;
        }

        if entry.node == end {
            return Some(RoutePath {
                path: entry.path,
                distance_m: entry.distance_m,
                route_ids: entry.route_ids,
            });
        }

        for edge in graph.neighbors(&entry.node) {
            if visited.contains(&edge.to) {
                continue;
            }

            let mut path = entry.path.clone();
            path.push(edge.to.clone());
            let mut route_ids = entry.route_ids.clone();
            route_ids.push(edge.route_id.clone());

            heap.push(Reverse(FrontierEntry {
                distance_m: entry.distance_m + edge.distance_m,
                node: edge.to.clone(),
                path,
                route_ids,
            }));
        }
    }

    None
}

/// Frontier entry for the diversified search. Each branch carries its own
/// set of traversed undirected edges, so edge reuse is forbidden within one
/// path-in-progress but sibling branches may reuse each other's edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct DiversifiedEntry {
    distance_m: u32,
    node: String,
    path: Vec<String>,
    route_ids: Vec<String>,
    used_edges: BTreeSet<(String, String)>,
}

/// Undirected edge identity: the endpoint pair in lexicographic order.
fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Produce up to `count` distinct routes in non-decreasing distance order.
///
/// Structurally a Dijkstra-style min-frontier, but keyed by the whole
/// branch state rather than the node, with completed paths deduplicated by
/// exact node sequence. This is a best-effort diversified expansion, not a
/// globally loop-free k-shortest-paths; total pops are capped so dense
/// graphs cannot grow the frontier without bound.
pub fn alternative_routes(graph: &Graph, start: &str, end: &str, count: usize) -> Vec<RoutePath> {
    let mut alternatives = Vec::new();
    if count == 0 {
        return alternatives;
    }

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(DiversifiedEntry {
        distance_m: 0,
        node: start.to_string(),
        path: vec![start.to_string()],
        route_ids: Vec::new(),
        used_edges: BTreeSet::new(),
    }));
    let mut found_paths: HashSet<Vec<String>> = HashSet::new();
    let mut expansions = 0usize;

    while alternatives.len() < count {
        let Some(Reverse(entry)) = heap.pop() else {
            break;
        };

        expansions += 1;
        if expansions > MAX_FRONTIER_EXPANSIONS {
            tracing::debug!(
                start = start,
                end = end,
                found = alternatives.len(),
                "Alternative-route search hit expansion cap, returning what was found"
            );
            break;
        }

        if entry.node == end {
            if found_paths.insert(entry.path.clone()) {
                alternatives.push(RoutePath {
                    path: entry.path,
                    distance_m: entry.distance_m,
                    route_ids: entry.route_ids,
                });
            }
            continue;
        }

        for edge in graph.neighbors(&entry.node) {
            let key = edge_key(&entry.node, &edge.to);
            if entry.used_edges.contains(&key) {
                continue;
            }

            let mut path = entry.path.clone();
            path.push(edge.to.clone());
            let mut route_ids = entry.route_ids.clone();
            route_ids.push(edge.route_id.clone());
            let mut used_edges = entry.used_edges.clone();
            used_edges.insert(key);

            heap.push(Reverse(DiversifiedEntry {
                distance_m: entry.distance_m + edge.distance_m,
                node: edge.to.clone(),
                path,
                route_ids,
                used_edges,
            }));
        }
    }

    alternatives
}
