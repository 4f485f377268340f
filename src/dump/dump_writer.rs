use crate::dump::RECORD_SEP;
use crate::errors::SResult;
use crate::skiplist::SkipList;
use crate::utils::cmp::Comparator;
use crate::utils::coding::Codec;
use crate::utils::random::RandomGenerator;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes a list as `<key>:<value>\n` records in ascending key order.
///
/// The codecs are injected so the record format never assumes a concrete
/// key/value type.
pub struct DumpWriter<CK, CV> {
    key_codec: CK,
    value_codec: CV,
}

impl<CK, CV> DumpWriter<CK, CV> {
    pub fn new(key_codec: CK, value_codec: CV) -> Self {
        DumpWriter {
            key_codec,
            value_codec,
        }
    }

    /// Write every record to `dst` by forward traversal, flush, and return
    /// the record count.
    pub fn dump_to<K, V, C, R, W>(&self, list: &SkipList<K, V, C, R>, dst: &mut W) -> SResult<usize>
    where
        CK: Codec<Item = K>,
        CV: Codec<Item = V>,
        C: Comparator<K>,
        R: RandomGenerator,
        W: Write,
    {
        let mut iter = list.iter();
        iter.seek_to_first();
        let mut written = 0;
        while iter.valid() {
            writeln!(
                dst,
                "{}{}{}",
                self.key_codec.encode(iter.key()),
                RECORD_SEP,
                self.value_codec.encode(iter.value())
            )?;
            written += 1;
            iter.next();
        }
        dst.flush()?;
        debug!("dumped {} records", written);
        Ok(written)
    }

    pub fn dump_file<K, V, C, R, P>(&self, list: &SkipList<K, V, C, R>, path: P) -> SResult<usize>
    where
        CK: Codec<Item = K>,
        CV: Codec<Item = V>,
        C: Comparator<K>,
        R: RandomGenerator,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        let mut dst = BufWriter::new(file);
        self.dump_to(list, &mut dst)
    }
}
