use skipmap::{Random, RandomGenerator, SkipList};
use std::collections::BTreeMap;
use std::time::Instant;

const N: u32 = 1_000_000;

/// Bulk insert, then alternating erase/find, wall-clock timed. Mirrors the
/// same workload on BTreeMap for comparison.
fn main() {
    env_logger::init();

    let rnd = Random::new(0x1234_5678);
    let mut list: SkipList<u32, u32> = SkipList::with_seed(0x8765_4321);

    let start = Instant::now();
    for _ in 0..N {
        list.insert(rnd.next(), rnd.next());
    }
    for i in 0..N {
        let key = rnd.next();
        if i & 1 == 1 {
            list.erase(&key);
        } else {
            list.find(&key).valid();
        }
    }
    println!("SkipList: {:.3}s ({} entries)", start.elapsed().as_secs_f64(), list.size());

    let rnd = Random::new(0x1234_5678);
    let mut map: BTreeMap<u32, u32> = BTreeMap::new();

    let start = Instant::now();
    for _ in 0..N {
        map.insert(rnd.next(), rnd.next());
    }
    for i in 0..N {
        let key = rnd.next();
        if i & 1 == 1 {
            map.remove(&key);
        } else {
            map.contains_key(&key);
        }
    }
    println!("BTreeMap: {:.3}s ({} entries)", start.elapsed().as_secs_f64(), map.len());
}
