use skipmap::{Random, RandomGenerator, SkipList};
use std::collections::BTreeMap;

/// Differential fuzz: drive a SkipList and a BTreeMap with the same
/// randomized workload, then require identical contents.
fn main() {
    env_logger::init();
    let rnd = Random::new(0x9e37_79b9);
    let mut list: SkipList<u32, u32> = SkipList::with_seed(0xdead_beef);
    let mut model: BTreeMap<u32, u32> = BTreeMap::new();

    for _ in 0..1_000 {
        let key = rnd.uniform(1_000);
        let value = rnd.next();
        list.insert(key, value);
        model.insert(key, value);
    }
    for round in 0..10_000 {
        let key = rnd.uniform(1_000);
        if rnd.one_in(2) {
            let value = rnd.next();
            list.insert(key, value);
            model.insert(key, value);
        } else {
            let erased = list.erase(&key);
            assert_eq!(
                erased,
                model.remove(&key).is_some(),
                "erase diverged at round {}",
                round
            );
        }
    }

    assert_eq!(list.size(), model.len());
    let mut iter = list.iter();
    iter.seek_to_first();
    for (key, value) in &model {
        assert!(iter.valid(), "list ran out before the model");
        assert_eq!(iter.key(), key);
        assert_eq!(iter.value(), value);
        iter.next();
    }
    assert!(!iter.valid(), "list has entries the model lacks");

    println!("validation passed: {} entries", model.len());
}
