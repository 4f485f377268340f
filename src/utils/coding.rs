use crate::errors::{SError, SResult};
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

/// Text encoding strategy for one dump-record field.
///
/// Injected into the persistence adapter so key/value types are never
/// hardcoded. A key codec must not emit the record separator `:`.
pub trait Codec {
    type Item;

    fn encode(&self, item: &Self::Item) -> String;
    fn decode(&self, src: &str) -> SResult<Self::Item>;
}

/// Codec for any type with `Display`/`FromStr` round-trip (integers, floats,
/// plain tokens).
pub struct TextCodec<T> {
    _marker: PhantomData<T>,
}

impl<T> TextCodec<T> {
    pub fn new() -> Self {
        TextCodec {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TextCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Codec for TextCodec<T>
where
    T: Display + FromStr,
    <T as FromStr>::Err: Display,
{
    type Item = T;

    fn encode(&self, item: &T) -> String {
        item.to_string()
    }

    fn decode(&self, src: &str) -> SResult<T> {
        src.parse::<T>()
            .map_err(|e| SError::Codec(format!("{} ({:?})", e, src)))
    }
}
