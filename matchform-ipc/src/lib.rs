pub mod command;
pub mod matcher;

pub use command::{Command, Response};
pub use matcher::{CompoundMatcher, LeafMatcher, MatcherKind, MatcherNode, MAX_DEPTH};
