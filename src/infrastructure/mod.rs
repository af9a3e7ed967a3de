pub mod decoding;
pub mod observability;
pub mod persistence;
pub mod storage;
