pub use dump_reader::DumpReader;
pub use dump_writer::DumpWriter;

mod dump_reader;
mod dump_writer;


/// Separator between the key and value fields of a dump record.
pub const RECORD_SEP: char = ':';
