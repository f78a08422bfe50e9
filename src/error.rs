use crate::sounds::Sound;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("matcher does not support repeated scanning")]
    NotRepeatable,

    #[error("pattern for {sound} is not repeatable")]
    EntryNotRepeatable { sound: Sound },

    #[error("compile pattern for {sound}")]
    InvalidPattern {
        sound: Sound,
        #[source]
        source: regex::Error,
    },
}
