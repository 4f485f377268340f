use std::result;

quick_error! {
    #[derive(Debug)]
    pub enum SError {
        Io(err: std::io::Error) {
            from()
            cause(err)
            display("Io {}", err)
        }
        // A single field could not be decoded by a codec.
        Codec(reason: String) {
            display("codec: {}", reason)
        }
        // A persisted record is malformed; carries the 1-based line number.
        Parse(line: usize, reason: String) {
            display("malformed record at line {}: {}", line, reason)
        }
    }
}

pub type SResult<T> = result::Result<T, SError>;
