//! Breadth-first flood and path reconstruction, structured like
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html)
//! but split in two: the flood records an ancestor per reached node and runs
//! the queue dry, after which any reached node can be pathed to by walking
//! ancestors back to the start.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Floods the graph from `start` in breadth-first order. Every reached node
/// is inserted into the returned map exactly once, when it is first enqueued,
/// mapped to the map index of the node it was reached from. The start maps to
/// [usize::MAX], which terminates ancestor walks.
pub fn bfs_flood<N, FN, IN>(start: &N, mut successors: FN) -> FxIndexMap<N, usize>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    let mut ancestors: FxIndexMap<N, usize> = FxIndexMap::default();
    ancestors.insert(start.clone(), usize::MAX);
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(0);
    while let Some(index) = queue.pop_front() {
        let successors = {
            let (node, _) = ancestors.get_index(index).unwrap();
            successors(node)
        };
        for successor in successors {
            // First reach wins: a node that is already present was reached
            // on an equally short or shorter level of the flood.
            if let Vacant(e) = ancestors.entry(successor) {
                queue.push_back(e.index());
                e.insert(index);
            }
        }
    }
    ancestors
}

/// Walks the ancestor chain from `end` back to the start of the flood and
/// reverses it into a start-to-end path. Returns [None] if `end` was never
/// reached.
pub fn reconstruct_path<N>(ancestors: &FxIndexMap<N, usize>, end: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    let end_index = ancestors.get_index_of(end)?;
    let mut path: Vec<N> = itertools::unfold(end_index, |i| {
        ancestors.get_index(*i).map(|(node, &ancestor)| {
            *i = ancestor;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    Some(path)
}
