//! Public facade crate for `tagfinder`.
//!
//! Re-exports the backend-agnostic types from `tagfinder-core` and the resolver entry points
//! from `tagfinder-local`, so embedders need a single dependency.

pub use tagfinder_core::*;
pub use tagfinder_local::{
    render, textprep, validate_and_repair, AliasTable, Catalog, Explanation, Resolver, Settings,
    StopwordSet,
};
