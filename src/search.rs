//! Edit-path search: the recursive enumerator that jointly walks the trie
//! and consumes the query string, emitting candidate matches.
//!
//! This is the hard part of the crate. See the module-level rules this
//! mirrors step for step:
//!
//! - empty-query termination (trailing inserts, terminal emission)
//! - the `edits == max` pruning optimisation, which restricts the search
//!   to the no-change move once the budget is exhausted
//! - the five-move enumeration at `edits < max`: delete, substitute,
//!   insert, transpose, no-change
//!
//! Duplicates produced by more than one edit path reaching the same
//! stored string are expected here; [`crate::combine`] removes them.

use tracing::trace;

use crate::node::Node;
use crate::Match;

pub(crate) fn search<V: Clone>(root: &Node<V>, query: &str, max_edits: usize) -> Vec<Match<V>> {
    let remaining: Vec<char> = query.chars().collect();
    let mut out = Vec::new();
    let mut path = Vec::new();
    walk(&mut path, &remaining, 0, max_edits, root, &mut out);
    out
}

fn emit<V: Clone>(path: &[char], edits: usize, value: &V, out: &mut Vec<Match<V>>) {
    let string: String = path.iter().collect();
    trace!(%string, edits, "candidate match");
    out.push(Match {
        string,
        edits,
        value: value.clone(),
    });
}

/// `node`'s children always carry a key. Only the root has `None`, and
/// the root is never itself a child.
fn child_key<V>(child: &Node<V>) -> char {
    child
        .key()
        .expect("non-root node reached during search without a key")
}

fn walk<V: Clone>(
    path: &mut Vec<char>,
    remaining: &[char],
    edits: usize,
    max: usize,
    node: &Node<V>,
    out: &mut Vec<Match<V>>,
) {
    if edits > max {
        trace!(edits, max, "pruned: edit budget exceeded");
        return;
    }

    if remaining.is_empty() {
        if let Some(value) = node.terminal() {
            emit(path, edits, value, out);
        }

        if !node.children().is_empty() {
            let next_edits = edits + 1;
            if next_edits <= max {
                for child in node.children() {
                    path.push(child_key(child));
                    walk(path, &[], next_edits, max, child, out);
                    path.pop();
                }
            }
        }
        return;
    }

    let h = remaining[0];
    let tail = &remaining[1..];

    // At saturation, only exact character consumption can still land on a
    // match within budget; every other move would exceed it.
    if edits == max {
        if let Some(child) = node.child(h) {
            path.push(h);
            walk(path, tail, edits, max, child, out);
            path.pop();
        }
        return;
    }

    // Delete: drop `h` from the query, stay at the same trie node.
    walk(path, tail, edits + 1, max, node, out);

    for child in node.children() {
        let k = child_key(child);

        // Substitute: replace `h` with a child key other than `h` itself.
        if k != h {
            path.push(k);
            walk(path, tail, edits + 1, max, child, out);
            path.pop();
        }

        // Insert: descend into a child before consuming `h`; `h` still
        // needs to be matched afterward.
        path.push(k);
        walk(path, remaining, edits + 1, max, child, out);
        path.pop();
    }

    // Transpose: swap `h` with the next query character, when they differ.
    if let [h2, rest @ ..] = tail {
        if *h2 != h {
            let mut swapped = Vec::with_capacity(remaining.len());
            swapped.push(*h2);
            swapped.push(h);
            swapped.extend_from_slice(rest);
            walk(path, &swapped, edits + 1, max, node, out);
        }
    }

    // No-change: consume `h` against a matching child, at no extra cost.
    if let Some(child) = node.child(h) {
        path.push(h);
        walk(path, tail, edits, max, child, out);
        path.pop();
    }
}
