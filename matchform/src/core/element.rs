use std::fmt;

use matchform_ipc::MatcherKind;

/// What a text field holds inside a matcher container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Pattern,
    Tags,
}

/// Action bound to a button. Targets are found structurally from the
/// button's position in the tree, so elements never hold handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Insert a separator and a blank pattern field before the button.
    AddPattern,
    /// Remove the enclosing field unit and the separator preceding it.
    RemoveField,
    /// Remove the enclosing matcher container.
    DeleteNode,
    /// Insert a fresh matcher of the kind before the enclosing menu group.
    AddChild(MatcherKind),
    /// Hide or show every following sibling.
    ToggleVisibility,
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affordance::AddPattern => f.write_str("add-pattern"),
            Affordance::RemoveField => f.write_str("remove-field"),
            Affordance::DeleteNode => f.write_str("delete"),
            Affordance::AddChild(kind) => write!(f, "add-child:{}", kind),
            Affordance::ToggleVisibility => f.write_str("toggle-visibility"),
        }
    }
}

/// A node of the editable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Root of a loaded document.
    Form,
    /// Container for one matcher node, stamped with its discriminant.
    Matcher { kind: MatcherKind, hovered: bool },
    Text(String),
    Separator,
    /// Pattern fields of a leaf matcher, followed by its add-pattern button.
    PatternList,
    /// Nested matcher containers of a compound matcher.
    ChildList,
    /// Label + input (+ remove button) unit.
    Field { label: String, role: FieldRole },
    Input { value: String },
    Button { label: String, affordance: Affordance },
    /// The "add matcher" button group.
    MenuGroup,
}

impl Element {
    pub fn is_separator(&self) -> bool {
        matches!(self, Element::Separator)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Form => f.write_str("form"),
            Element::Matcher { kind, hovered } => {
                write!(f, "matcher type={}", kind)?;
                if *hovered {
                    f.write_str(" [hovered]")?;
                }
                Ok(())
            }
            Element::Text(text) => write!(f, "text {:?}", text),
            Element::Separator => f.write_str("separator"),
            Element::PatternList => f.write_str("patterns"),
            Element::ChildList => f.write_str("children"),
            Element::Field { label, role } => {
                let role = match role {
                    FieldRole::Pattern => "pattern",
                    FieldRole::Tags => "tags",
                };
                write!(f, "field {:?} role={}", label, role)
            }
            Element::Input { value } => write!(f, "input {:?}", value),
            Element::Button { label, affordance } => {
                write!(f, "button {:?} -> {}", label, affordance)
            }
            Element::MenuGroup => f.write_str("menu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_display() {
        let cases = [
            (
                Element::Matcher {
                    kind: MatcherKind::Or,
                    hovered: true,
                },
                "matcher type=or [hovered]",
            ),
            (
                Element::Field {
                    label: "tags".to_string(),
                    role: FieldRole::Tags,
                },
                "field \"tags\" role=tags",
            ),
            (
                Element::Button {
                    label: "class".to_string(),
                    affordance: Affordance::AddChild(MatcherKind::Class),
                },
                "button \"class\" -> add-child:class",
            ),
            (
                Element::Input {
                    value: "a,b".to_string(),
                },
                "input \"a,b\"",
            ),
        ];

        for (element, expected) in cases {
            assert_eq!(element.to_string(), expected);
        }
    }

    #[test]
    fn test_is_separator() {
        assert!(Element::Separator.is_separator());
        assert!(!Element::MenuGroup.is_separator());
    }
}
