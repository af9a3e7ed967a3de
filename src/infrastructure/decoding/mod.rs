mod export_decoder;
mod merger;

pub use export_decoder::{decode_export, escape_to_export, DecodeError};
pub use merger::{merge_conversations, MergeError};
