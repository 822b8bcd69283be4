//! Core types and storage contract for the todoapi service.
//!
//! - [`todo`]: the `Todo` model and the pure operations applied to it.
//! - [`storage`]: the `TodoStore` backend contract and the `TodoRepository`
//!   that enforces identity and update policy on top of it.

pub mod storage;
pub mod todo;
