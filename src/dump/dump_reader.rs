use crate::dump::RECORD_SEP;
use crate::errors::{SError, SResult};
use crate::skiplist::SkipList;
use crate::utils::cmp::Comparator;
use crate::utils::coding::Codec;
use crate::utils::random::RandomGenerator;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses `<key>:<value>` records back into key/value pairs.
///
/// Parsing is all-or-nothing: a malformed line fails the whole load before
/// anything reaches a container.
pub struct DumpReader<CK, CV> {
    key_codec: CK,
    value_codec: CV,
}

impl<CK, CV> DumpReader<CK, CV> {
    pub fn new(key_codec: CK, value_codec: CV) -> Self {
        DumpReader {
            key_codec,
            value_codec,
        }
    }

    /// Decode every record. Splits each line on the first separator; a
    /// missing separator or a codec failure reports the 1-based line number.
    pub fn load_from<K, V, S>(&self, src: S) -> SResult<Vec<(K, V)>>
    where
        CK: Codec<Item = K>,
        CV: Codec<Item = V>,
        S: BufRead,
    {
        let mut records = Vec::new();
        for (no, line) in src.lines().enumerate() {
            let line = line?;
            let sep = line
                .find(RECORD_SEP)
                .ok_or_else(|| SError::Parse(no + 1, "missing separator".to_string()))?;
            let key = self
                .key_codec
                .decode(&line[..sep])
                .map_err(|e| SError::Parse(no + 1, e.to_string()))?;
            let value = self
                .value_codec
                .decode(&line[sep + 1..])
                .map_err(|e| SError::Parse(no + 1, e.to_string()))?;
            records.push((key, value));
        }
        Ok(records)
    }

    /// Load a dump file and re-insert each pair (insert is upsert).
    pub fn load_file<K, V, C, R, P>(
        &self,
        list: &mut SkipList<K, V, C, R>,
        path: P,
    ) -> SResult<usize>
    where
        CK: Codec<Item = K>,
        CV: Codec<Item = V>,
        C: Comparator<K>,
        R: RandomGenerator,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let records = self.load_from(BufReader::new(file))?;
        let loaded = records.len();
        for (key, value) in records {
            list.insert(key, value);
        }
        debug!("loaded {} records", loaded);
        Ok(loaded)
    }
}
