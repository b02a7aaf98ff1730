//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and page
//! logic to improve reuse and testability.

pub mod token_storage;
