mod import_service;

pub use import_service::{ImportError, ImportReceipt, ImportService};
