//! Path and depth assignment over the support graph
//!
//! Support edges (from = child, to = parent) are folded into a
//! materialized-path labeling: every statement receives a dot-delimited
//! path of sanitized labels and an integer depth. The traversal is
//! deterministic — roots in document order, children in sorted-id order —
//! and linearizes convergent support into a spanning tree:
//! first-discovery-wins, by contract, not by accident.
//!
//! Statements never reached from a root (isolated nodes, or members of a
//! cycle with no external entry) are assigned their own sanitized id as a
//! trivial self-path at depth 0.

use argmap_domain::{RelationshipEdge, StatementNode};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{info, warn};

/// Allocator for collision-free placeholder labels
///
/// Lives for exactly one parse call: creating it fresh per call (instead
/// of storing a counter on a long-lived normalizer) is what keeps
/// placeholder labels collision-free when one normalizer instance serves
/// many concurrent callers.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    next: usize,
}

impl LabelAllocator {
    /// Create an allocator scoped to one document
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean a label so it is valid in a dot-delimited path
    ///
    /// Every character outside `[A-Za-z0-9_]` becomes `_`. An empty
    /// result is replaced with a placeholder that is unique within this
    /// allocator's document.
    pub fn sanitize(&mut self, label: &str) -> String {
        let cleaned: String = label
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        if cleaned.is_empty() {
            let replacement = format!("invalid_id_{}", self.next);
            self.next += 1;
            warn!("invalid label '{}' replaced with '{}'", label, replacement);
            return replacement;
        }
        cleaned
    }
}

/// Assign a path and depth to every statement
///
/// Only `support` edges whose endpoints both resolve to known statement
/// ids shape the hierarchy; `oppose` edges and dangling references never
/// do. On return, every statement's `path` is `Some` and its `depth` is
/// consistent with it.
pub fn assign_paths_and_depths(
    statements: &mut [StatementNode],
    relationships: &[RelationshipEdge],
) {
    let ids: HashSet<&str> = statements.iter().map(|s| s.external_id.as_str()).collect();

    // from = child, to = parent
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut supporters: HashSet<&str> = HashSet::new();
    for rel in relationships.iter().filter(|r| r.relation_type.is_hierarchical()) {
        let (from, to) = (rel.from_id.as_str(), rel.to_id.as_str());
        if ids.contains(from) && ids.contains(to) {
            children.entry(to).or_default().push(from);
            supporters.insert(from);
        } else {
            warn!(
                "support relationship from '{}' to '{}' references a nonexistent statement id; ignored",
                from, to
            );
        }
    }

    let mut allocator = LabelAllocator::new();
    let mut assigned: HashMap<String, (String, u32)> = HashMap::new();

    // A root never supports anything; process roots in document order
    let roots: Vec<&str> = statements
        .iter()
        .map(|s| s.external_id.as_str())
        .filter(|id| !supporters.contains(id))
        .collect();

    for root_id in roots {
        if assigned.contains_key(root_id) {
            continue;
        }
        let root_label = allocator.sanitize(root_id);
        let mut queue: VecDeque<(&str, String, u32)> = VecDeque::new();
        queue.push_back((root_id, root_label, 0));

        while let Some((id, path, depth)) = queue.pop_front() {
            // First discovery wins; later encounters of a convergent node
            // are skipped
            if assigned.contains_key(id) {
                continue;
            }
            assigned.insert(id.to_string(), (path.clone(), depth));

            let mut kids: Vec<&str> = children.get(id).map(|k| k.to_vec()).unwrap_or_default();
            kids.sort_unstable();
            for kid in kids {
                if !assigned.contains_key(kid) {
                    let label = allocator.sanitize(kid);
                    queue.push_back((kid, format!("{}.{}", path, label), depth + 1));
                }
            }
        }
    }

    for stmt in statements.iter_mut() {
        if let Some((path, depth)) = assigned.get(stmt.external_id.as_str()) {
            stmt.path = Some(path.clone());
            stmt.depth = *depth;
        } else {
            // Unreachable from any root: isolated node or cycle member
            let path = allocator.sanitize(&stmt.external_id);
            info!(
                "isolated statement '{}' assigned path '{}'",
                stmt.external_id, path
            );
            stmt.path = Some(path);
            stmt.depth = 0;
        }
    }
}
