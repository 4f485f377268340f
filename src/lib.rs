#![allow(clippy::module_inception)]
#[macro_use]
extern crate quick_error;
extern crate env_logger;

pub use crate::dump::{DumpReader, DumpWriter, RECORD_SEP};
pub use crate::errors::{SError, SResult};
pub use crate::skiplist::{SkipList, SkipListIter, BRANCHING, MAX_LEVEL};
pub use crate::utils::cmp::{Comparator, DefaultComparator, ReverseComparator};
pub use crate::utils::coding::{Codec, TextCodec};
pub use crate::utils::random::{Random, RandomGenerator};

mod dump;
mod errors;
mod skiplist;
mod utils;
