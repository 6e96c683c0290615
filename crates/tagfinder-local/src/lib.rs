//! In-memory query resolution engine for tagfinder.
//!
//! Everything here is synchronous and allocation-light; the only IO is reading optional
//! settings/data files at startup (see [`config`]).

pub mod alias;
pub mod builtin;
pub mod catalog;
pub mod config;
pub mod render;
pub mod resolver;
pub mod stopwords;
pub mod textprep;

pub use alias::AliasTable;
pub use catalog::{validate_and_repair, Catalog};
pub use config::Settings;
pub use resolver::{Explanation, Resolver};
pub use stopwords::StopwordSet;
