//! Persistence layer: all SQL lives here.
//!
//! Handlers orchestrate; these modules own the queries. Every todo operation
//! folds the owner id into its predicate, so authorization is part of the
//! lookup itself rather than a separate check.

pub mod todos;
pub mod users;
