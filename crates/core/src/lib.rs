//! Functional core for the resume items backend.
//!
//! Pure domain types and functions with no I/O: the `Item` entity and its
//! shared field list, identity resolution from authorizer claims, and the
//! repository seam implemented by the storage backends in the `resume` crate.

pub mod identity;
pub mod item;
pub mod storage;
