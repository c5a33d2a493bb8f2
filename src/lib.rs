//! Fixed-capacity string-keyed dictionary using open addressing with
//! linear probing, plus the instrumentation the hash-distribution driver
//! needs: the hash function itself, initial-probe statistics and a
//! newline-separated key-file reader.

pub mod error;
pub mod hash;
pub mod reader;
pub mod stats;
pub mod table;

pub use error::{InsertError, InsertErrorKind, TableError};
pub use stats::ProbeCounter;
pub use table::{FixedProbingTable, Keyed};
