//! Session result records and the persistence seam
//!
//! Re-exports only. All logic in submodules.

pub mod session_record;
pub mod store;

pub use session_record::SessionRecord;
pub use store::{MemoryRecordStore, RecordStore};
