use crate::skiplist::skipnode::{NodeIdx, TAIL};
use crate::skiplist::SkipList;
use crate::utils::cmp::{Comparator, DefaultComparator};
use crate::utils::random::{Random, RandomGenerator};

/// Forward cursor over the level-0 chain, ascending key order.
///
/// Borrows the list, so structural mutation while a cursor is alive does not
/// compile. An invalid cursor sits on the tail sentinel; reading or stepping
/// it is a programming defect.
pub struct SkipListIter<'a, K, V, C = DefaultComparator, R = Random> {
    list: &'a SkipList<K, V, C, R>,
    node: NodeIdx,
}

impl<'a, K, V, C, R> SkipListIter<'a, K, V, C, R>
where
    C: Comparator<K>,
    R: RandomGenerator,
{
    pub(super) fn at(list: &'a SkipList<K, V, C, R>, node: NodeIdx) -> Self {
        Self { list, node }
    }

    pub fn valid(&self) -> bool {
        self.node != TAIL
    }

    pub fn seek_to_first(&mut self) {
        self.node = self.list.first_idx();
    }

    /// Position at the first entry with key >= `target`.
    pub fn seek(&mut self, target: &K) {
        self.node = self.list.seek_idx(target);
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        assert!(self.valid());
        self.node = self.list.node_next(self.node);
    }

    pub fn key(&self) -> &'a K {
        assert!(self.valid());
        self.list.node_entry(self.node).0
    }

    pub fn value(&self) -> &'a V {
        assert!(self.valid());
        self.list.node_entry(self.node).1
    }
}
