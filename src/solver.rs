//! Minimax backup and training-record emission

pub mod backup;
pub mod recorder;

pub use backup::{ROOT_DEPTH, backup};
pub use recorder::{Recorder, encode_line};
