use matchform_ipc::{CompoundMatcher, LeafMatcher, MatcherKind, MatcherNode};

use crate::core::{Affordance, Element};
use crate::platform::Surface;

use super::controls::{
    add_matcher_menu, button, delete_button, label, matcher_label, pattern_field, separator,
    tags_field, visibility_toggle, ADD_PATTERN_LABEL,
};

/// Build a fresh form root holding one container per node and an
/// "add matcher" menu at the end.
pub fn build_form<S: Surface>(surface: &mut S, nodes: &[MatcherNode]) -> S::Handle {
    let form = surface.create(Element::Form);
    build_tree(surface, form, nodes, true);
    tracing::info!("Built form for {} matcher(s)", nodes.len());
    form
}

/// Append one container per node to `container`, in order.
pub fn build_tree<S: Surface>(
    surface: &mut S,
    container: S::Handle,
    nodes: &[MatcherNode],
    with_menu: bool,
) {
    for node in nodes {
        let built = build_matcher(surface, node);
        surface.append_child(container, built);
    }
    if with_menu {
        let menu = add_matcher_menu(surface);
        surface.append_child(container, menu);
    }
}

pub fn build_matcher<S: Surface>(surface: &mut S, node: &MatcherNode) -> S::Handle {
    match node {
        MatcherNode::Name(leaf) | MatcherNode::Class(leaf) => {
            build_leaf(surface, node.kind(), leaf)
        }
        MatcherNode::And(compound) | MatcherNode::Or(compound) => {
            build_compound(surface, node.kind(), compound)
        }
    }
}

fn open_container<S: Surface>(surface: &mut S, kind: MatcherKind) -> S::Handle {
    let container = surface.create(Element::Matcher {
        kind,
        hovered: false,
    });
    let title = label(surface, matcher_label(kind));
    let delete = delete_button(surface);
    let toggle = visibility_toggle(surface);
    surface.append_child(container, title);
    surface.append_child(container, delete);
    surface.append_child(container, toggle);
    container
}

fn build_leaf<S: Surface>(surface: &mut S, kind: MatcherKind, leaf: &LeafMatcher) -> S::Handle {
    let container = open_container(surface, kind);

    let patterns = surface.create(Element::PatternList);
    // At least one field, so the node can always be extracted again
    let blank = [String::new()];
    let entries = if leaf.matcher.is_empty() {
        &blank[..]
    } else {
        &leaf.matcher[..]
    };
    for (i, pattern) in entries.iter().enumerate() {
        if i > 0 {
            let sep = separator(surface);
            surface.append_child(patterns, sep);
        }
        let unit = pattern_field(surface, pattern);
        surface.append_child(patterns, unit);
    }
    let add = button(surface, ADD_PATTERN_LABEL, Affordance::AddPattern);
    surface.append_child(patterns, add);
    surface.append_child(container, patterns);

    let tags = tags_field(surface, &leaf.tags);
    surface.append_child(container, tags);
    container
}

fn build_compound<S: Surface>(
    surface: &mut S,
    kind: MatcherKind,
    compound: &CompoundMatcher,
) -> S::Handle {
    let container = open_container(surface, kind);

    let children = surface.create(Element::ChildList);
    build_tree(surface, children, &compound.matcher, true);
    surface.append_child(container, children);

    let tags = tags_field(surface, &compound.tags);
    surface.append_child(container, tags);
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldRole;
    use crate::platform::{HeadlessSurface, NodeId};

    fn elements(surface: &HeadlessSurface, node: NodeId) -> Vec<Element> {
        surface
            .children(node)
            .into_iter()
            .filter_map(|c| surface.element(c).cloned())
            .collect()
    }

    #[test]
    fn test_leaf_container_layout() {
        let mut surface = HeadlessSurface::new();
        let node = build_matcher(&mut surface, &MatcherNode::name(["a", "b"], ["t"]));

        let children = surface.children(node);
        assert_eq!(
            surface.element(node),
            Some(&Element::Matcher {
                kind: MatcherKind::Name,
                hovered: false,
            })
        );
        assert_eq!(
            surface.element(children[0]),
            Some(&Element::Text("Window Name Matcher".to_string()))
        );
        assert!(matches!(
            surface.element(children[1]),
            Some(Element::Button {
                affordance: Affordance::DeleteNode,
                ..
            })
        ));
        assert!(matches!(
            surface.element(children[2]),
            Some(Element::Button {
                affordance: Affordance::ToggleVisibility,
                ..
            })
        ));
        assert_eq!(surface.element(children[3]), Some(&Element::PatternList));
        assert!(matches!(
            surface.element(children[4]),
            Some(Element::Field {
                role: FieldRole::Tags,
                ..
            })
        ));
    }

    #[test]
    fn test_separators_only_between_patterns() {
        let mut surface = HeadlessSurface::new();
        let node = build_matcher(&mut surface, &MatcherNode::class(["a", "b", "c"], ["t"]));
        let patterns = surface
            .find_child(node, |e| matches!(e, Element::PatternList))
            .unwrap();

        let shape: Vec<&str> = elements(&surface, patterns)
            .iter()
            .map(|e| match e {
                Element::Field { .. } => "field",
                Element::Separator => "sep",
                Element::Button { .. } => "button",
                _ => "other",
            })
            .collect();
        assert_eq!(
            shape,
            vec!["field", "sep", "field", "sep", "field", "button"]
        );
    }

    #[test]
    fn test_empty_leaf_gets_one_blank_field() {
        let mut surface = HeadlessSurface::new();
        let node = build_matcher(&mut surface, &MatcherNode::empty(MatcherKind::Class));
        let patterns = surface
            .find_child(node, |e| matches!(e, Element::PatternList))
            .unwrap();
        let fields = surface.children(patterns);

        assert_eq!(fields.len(), 2);
        let input = surface.children(fields[0])[0];
        assert_eq!(surface.value(input), Some(""));
    }

    #[test]
    fn test_compound_nests_children_and_menu() {
        let mut surface = HeadlessSurface::new();
        let node = build_matcher(
            &mut surface,
            &MatcherNode::or(
                vec![
                    MatcherNode::name(["x"], Vec::<String>::new()),
                    MatcherNode::class(["y"], Vec::<String>::new()),
                ],
                ["t"],
            ),
        );

        let children = surface
            .find_child(node, |e| matches!(e, Element::ChildList))
            .unwrap();
        let nested = elements(&surface, children);
        assert_eq!(nested.len(), 3);
        assert!(matches!(
            nested[0],
            Element::Matcher {
                kind: MatcherKind::Name,
                ..
            }
        ));
        assert!(matches!(
            nested[1],
            Element::Matcher {
                kind: MatcherKind::Class,
                ..
            }
        ));
        assert_eq!(nested[2], Element::MenuGroup);

        // No pattern list on compound nodes
        assert!(surface
            .find_child(node, |e| matches!(e, Element::PatternList))
            .is_none());
    }

    #[test]
    fn test_form_ends_with_menu() {
        let mut surface = HeadlessSurface::new();
        let form = build_form(&mut surface, &[MatcherNode::name(["a"], ["t"])]);
        let top = elements(&surface, form);

        assert_eq!(surface.element(form), Some(&Element::Form));
        assert_eq!(top.len(), 2);
        assert_eq!(top[1], Element::MenuGroup);
    }

    #[test]
    fn test_build_tree_without_menu() {
        let mut surface = HeadlessSurface::new();
        let container = surface.create(Element::ChildList);
        build_tree(
            &mut surface,
            container,
            &[MatcherNode::name(["a"], ["t"])],
            false,
        );

        assert_eq!(surface.children(container).len(), 1);
    }
}
