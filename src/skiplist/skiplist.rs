use crate::skiplist::skipnode::{NodeArena, NodeIdx, HEAD, TAIL};
use crate::skiplist::{SkipListIter, BRANCHING, MAX_LEVEL};
use crate::utils::cmp::{Comparator, DefaultComparator};
use crate::utils::random::{Random, RandomGenerator};

/// Ordered map over a probabilistic multi-level linked list.
///
/// Nodes live in an index-addressed arena; forward links are arena indices.
/// Expected O(log n) insert/erase/find, O(n) worst case on degenerate
/// leveling. Single-threaded; iterators borrow the container, so structural
/// mutation during traversal is rejected at compile time.
pub struct SkipList<K, V, C = DefaultComparator, R = Random> {
    arena: NodeArena<K, V>,
    /// Current top level. 0 when the list is empty.
    level: usize,
    length: usize,
    cmp: C,
    rand: R,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Natural-order list with a seeded generator.
    pub fn with_seed(seed: u32) -> Self {
        SkipList::new(Random::new(seed), DefaultComparator)
    }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
    C: Comparator<K>,
    R: RandomGenerator,
{
    pub fn new(rand: R, cmp: C) -> Self {
        SkipList {
            arena: NodeArena::new(),
            level: 0,
            length: 0,
            cmp,
            rand,
        }
    }

    /// Draw a level in `[1, MAX_LEVEL]`; promotion chance 1/BRANCHING per
    /// step, geometric in expectation.
    fn random_level(&self) -> usize {
        let mut lvl = 1;
        while lvl < MAX_LEVEL && self.rand.one_in(BRANCHING) {
            lvl += 1;
        }
        lvl
    }

    /// Walk from the head at the top level, descending each time the next
    /// node is not strictly less than `key`. Records the last node visited
    /// per level into `prev` when requested. Returns the level-0 successor
    /// of the final predecessor: the exact node, the first greater node, or
    /// `TAIL`.
    fn locate(&self, key: &K, mut prev: Option<&mut [NodeIdx; MAX_LEVEL + 1]>) -> NodeIdx {
        let mut cur = HEAD;
        for i in (0..=self.level).rev() {
            loop {
                let next = self.arena.get(cur).get_next(i);
                if next != TAIL && self.cmp.lt(self.arena.get(next).key(), key) {
                    cur = next;
                } else {
                    break;
                }
            }
            if let Some(p) = prev.as_mut() {
                p[i] = cur;
            }
        }
        self.arena.get(cur).get_next(0)
    }

    /// Insert or overwrite. An existing key keeps its node and the list
    /// shape; only the value changes. Returns the stored value, valid until
    /// the next structural mutation.
    pub fn insert(&mut self, key: K, value: V) -> &mut V {
        let mut update = [HEAD; MAX_LEVEL + 1];
        let cand = self.locate(&key, Some(&mut update));
        if cand != TAIL && self.cmp.eq(self.arena.get(cand).key(), &key) {
            let node = self.arena.get_mut(cand);
            node.set_value(value);
            return node.value_mut();
        }

        let height = self.random_level();
        if height > self.level {
            // The head is the predecessor on every newly occupied level.
            for slot in update.iter_mut().take(height + 1).skip(self.level + 1) {
                *slot = HEAD;
            }
            self.level = height;
        }

        let idx = self.arena.alloc(key, value, height);
        for i in 0..=height {
            let next = self.arena.get(update[i]).get_next(i);
            self.arena.get_mut(idx).set_next(i, next);
            self.arena.get_mut(update[i]).set_next(i, idx);
        }
        self.length += 1;
        self.arena.get_mut(idx).value_mut()
    }

    /// Remove `key` if present. Absent keys are a normal negative result.
    pub fn erase(&mut self, key: &K) -> bool {
        let mut update = [HEAD; MAX_LEVEL + 1];
        let cand = self.locate(key, Some(&mut update));
        if cand == TAIL || self.cmp.ne(self.arena.get(cand).key(), key) {
            return false;
        }

        let height = self.arena.get(cand).height();
        for i in 0..=height {
            debug_assert_eq!(self.arena.get(update[i]).get_next(i), cand);
            let next = self.arena.get(cand).get_next(i);
            self.arena.get_mut(update[i]).set_next(i, next);
        }
        self.arena.release(cand);

        // Keep the top level tight.
        while self.level > 0 && self.arena.get(HEAD).get_next(self.level) == TAIL {
            self.level -= 1;
        }
        self.length -= 1;
        true
    }

    /// Cursor positioned at `key`, or an invalid (end) cursor if absent.
    pub fn find(&self, key: &K) -> SkipListIter<'_, K, V, C, R> {
        let cand = self.locate(key, None);
        let node = if cand != TAIL && self.cmp.eq(self.arena.get(cand).key(), key) {
            cand
        } else {
            TAIL
        };
        SkipListIter::at(self, node)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).valid()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let cand = self.locate(key, None);
        if cand != TAIL && self.cmp.eq(self.arena.get(cand).key(), key) {
            Some(self.arena.get(cand).value())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let cand = self.locate(key, None);
        if cand != TAIL && self.cmp.eq(self.arena.get(cand).key(), key) {
            Some(self.arena.get_mut(cand).value_mut())
        } else {
            None
        }
    }

    /// Indexing semantics: the value under `key`, inserting a default first
    /// when absent. The insert path re-resolves the node instead of reusing
    /// the initial probe.
    pub fn get_or_insert(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let cand = self.locate(&key, None);
        if cand != TAIL && self.cmp.eq(self.arena.get(cand).key(), &key) {
            return self.arena.get_mut(cand).value_mut();
        }
        self.insert(key, V::default())
    }

    pub fn size(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Unpositioned cursor; call `seek_to_first` or `seek` before reading.
    pub fn iter(&self) -> SkipListIter<'_, K, V, C, R> {
        SkipListIter::at(self, TAIL)
    }

    /// Drop every entry. The sentinels are re-created and the list stays
    /// usable.
    pub fn clear(&mut self) {
        self.arena.reset();
        self.level = 0;
        self.length = 0;
    }

    pub(super) fn first_idx(&self) -> NodeIdx {
        self.arena.get(HEAD).get_next(0)
    }

    /// First node with key >= `key`, or `TAIL`.
    pub(super) fn seek_idx(&self, key: &K) -> NodeIdx {
        self.locate(key, None)
    }

    pub(super) fn node_next(&self, idx: NodeIdx) -> NodeIdx {
        self.arena.get(idx).get_next(0)
    }

    pub(super) fn node_entry(&self, idx: NodeIdx) -> (&K, &V) {
        self.arena.get(idx).entry()
    }
}
