//! State Management
//!
//! Page-local record stores, intake validation, and shared toast state.

pub mod global;
pub mod intake;
pub mod records;
pub mod store;

pub use global::{provide_global_state, GlobalState};
pub use store::{IdGen, RecordStore};
