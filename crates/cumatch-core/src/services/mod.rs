//! Core services composing the resolver and command builder.

mod matcher;

pub use matcher::MatchService;
