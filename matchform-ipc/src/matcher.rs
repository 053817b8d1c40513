use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Deepest matcher nesting a document may have. Each level is two JSON
/// levels, so a stored document stays under serde_json's recursion limit.
pub const MAX_DEPTH: usize = 32;

/// Which variant a matcher node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    Name,
    Class,
    And,
    Or,
}

impl MatcherKind {
    /// Order in which "add matcher" menus offer the kinds.
    pub const MENU_ORDER: [MatcherKind; 4] = [
        MatcherKind::Name,
        MatcherKind::Class,
        MatcherKind::Or,
        MatcherKind::And,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatcherKind::Name => "name",
            MatcherKind::Class => "class",
            MatcherKind::And => "and",
            MatcherKind::Or => "or",
        }
    }

    pub fn is_compound(self) -> bool {
        matches!(self, MatcherKind::And | MatcherKind::Or)
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches windows by title (`name`) or class (`class`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafMatcher {
    /// Patterns in order. The legacy bare-string form loads as a single pattern.
    #[serde(default, deserialize_with = "one_or_many")]
    pub matcher: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// Boolean combination of child matchers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundMatcher {
    #[serde(default)]
    pub matcher: Vec<MatcherNode>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// One entry in a matcher tree, tagged on `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatcherNode {
    Name(LeafMatcher),
    Class(LeafMatcher),
    And(CompoundMatcher),
    Or(CompoundMatcher),
}

impl MatcherNode {
    pub fn name<P, T>(patterns: P, tags: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        MatcherNode::Name(LeafMatcher {
            matcher: patterns.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    pub fn class<P, T>(patterns: P, tags: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        MatcherNode::Class(LeafMatcher {
            matcher: patterns.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    pub fn and<T>(children: Vec<MatcherNode>, tags: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        MatcherNode::And(CompoundMatcher {
            matcher: children,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    pub fn or<T>(children: Vec<MatcherNode>, tags: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        MatcherNode::Or(CompoundMatcher {
            matcher: children,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    /// A node of the given kind with no patterns, children or tags.
    pub fn empty(kind: MatcherKind) -> Self {
        match kind {
            MatcherKind::Name => MatcherNode::Name(LeafMatcher::default()),
            MatcherKind::Class => MatcherNode::Class(LeafMatcher::default()),
            MatcherKind::And => MatcherNode::And(CompoundMatcher::default()),
            MatcherKind::Or => MatcherNode::Or(CompoundMatcher::default()),
        }
    }

    pub fn kind(&self) -> MatcherKind {
        match self {
            MatcherNode::Name(_) => MatcherKind::Name,
            MatcherNode::Class(_) => MatcherKind::Class,
            MatcherNode::And(_) => MatcherKind::And,
            MatcherNode::Or(_) => MatcherKind::Or,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            MatcherNode::Name(leaf) | MatcherNode::Class(leaf) => &leaf.tags,
            MatcherNode::And(compound) | MatcherNode::Or(compound) => &compound.tags,
        }
    }

    /// Nesting depth of this subtree. A leaf is 1.
    pub fn depth(&self) -> usize {
        match self {
            MatcherNode::Name(_) | MatcherNode::Class(_) => 1,
            MatcherNode::And(compound) | MatcherNode::Or(compound) => {
                1 + compound
                    .matcher
                    .iter()
                    .map(MatcherNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(pattern) => vec![pattern],
        OneOrMany::Many(patterns) => patterns,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
