//! Mapping between matcher trees and editable forms.
//!
//! [`build_form`] renders a `MatcherNode` list onto a [`Surface`], and
//! [`extract_tree`] reads the current field values back. Buttons placed by
//! the builder are run through [`activate`].
//!
//! [`Surface`]: crate::platform::Surface

mod affordance;
mod builder;
mod controls;
mod extractor;

pub use affordance::{activate, hover, Activation};
pub use builder::{build_form, build_matcher, build_tree};
pub use controls::{join_tags, split_tags};
pub use extractor::extract_tree;
