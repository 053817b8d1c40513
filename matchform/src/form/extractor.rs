use matchform_ipc::{CompoundMatcher, LeafMatcher, MatcherKind, MatcherNode};

use crate::core::{Element, FieldRole, FormError};
use crate::platform::Surface;

use super::controls::split_tags;

/// Read the matcher containers directly under `container`, in order.
/// Structural children such as menus and separators are skipped.
pub fn extract_tree<S: Surface>(
    surface: &S,
    container: S::Handle,
) -> Result<Vec<MatcherNode>, FormError> {
    let mut nodes = Vec::new();
    for child in surface.children(container) {
        let kind = match surface.element(child) {
            Some(Element::Matcher { kind, .. }) => *kind,
            _ => continue,
        };
        nodes.push(extract_matcher(surface, child, kind)?);
    }
    Ok(nodes)
}

fn extract_matcher<S: Surface>(
    surface: &S,
    node: S::Handle,
    kind: MatcherKind,
) -> Result<MatcherNode, FormError> {
    Ok(match kind {
        MatcherKind::Name => MatcherNode::Name(extract_leaf(surface, node)?),
        MatcherKind::Class => MatcherNode::Class(extract_leaf(surface, node)?),
        MatcherKind::And => MatcherNode::And(extract_compound(surface, node)?),
        MatcherKind::Or => MatcherNode::Or(extract_compound(surface, node)?),
    })
}

fn extract_leaf<S: Surface>(surface: &S, node: S::Handle) -> Result<LeafMatcher, FormError> {
    let mut matcher = Vec::new();
    if let Some(patterns) = surface.find_child(node, |e| matches!(e, Element::PatternList)) {
        for child in surface.children(patterns) {
            if let Some(Element::Field {
                role: FieldRole::Pattern,
                ..
            }) = surface.element(child)
            {
                matcher.push(read_field(surface, child)?);
            }
        }
    }
    if matcher.is_empty() {
        return Err(FormError::LeafWithoutFields);
    }

    Ok(LeafMatcher {
        matcher,
        tags: extract_tags(surface, node)?,
    })
}

fn extract_compound<S: Surface>(
    surface: &S,
    node: S::Handle,
) -> Result<CompoundMatcher, FormError> {
    let children = surface
        .find_child(node, |e| matches!(e, Element::ChildList))
        .ok_or(FormError::MissingChildList)?;

    Ok(CompoundMatcher {
        matcher: extract_tree(surface, children)?,
        tags: extract_tags(surface, node)?,
    })
}

fn extract_tags<S: Surface>(surface: &S, node: S::Handle) -> Result<Vec<String>, FormError> {
    let field = surface
        .find_child(node, |e| {
            matches!(
                e,
                Element::Field {
                    role: FieldRole::Tags,
                    ..
                }
            )
        })
        .ok_or(FormError::MissingTagsField)?;
    Ok(split_tags(&read_field(surface, field)?))
}

fn read_field<S: Surface>(surface: &S, field: S::Handle) -> Result<String, FormError> {
    surface
        .children(field)
        .into_iter()
        .find_map(|c| surface.value(c))
        .map(str::to_string)
        .ok_or(FormError::FieldWithoutInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::builder::{build_form, build_matcher};
    use crate::platform::HeadlessSurface;

    #[test]
    fn test_extract_skips_menu() {
        let mut surface = HeadlessSurface::new();
        let nodes = vec![MatcherNode::name(["a"], ["t"])];
        let form = build_form(&mut surface, &nodes);

        assert_eq!(extract_tree(&surface, form).unwrap(), nodes);
    }

    #[test]
    fn test_leaf_without_pattern_fields_is_an_error() {
        let mut surface = HeadlessSurface::new();
        let form = surface.create(Element::Form);
        let node = build_matcher(&mut surface, &MatcherNode::name(["a"], ["t"]));
        surface.append_child(form, node);

        let patterns = surface
            .find_child(node, |e| matches!(e, Element::PatternList))
            .unwrap();
        for child in surface.children(patterns) {
            if matches!(surface.element(child), Some(Element::Field { .. })) {
                surface.remove(child);
            }
        }

        assert_eq!(
            extract_tree(&surface, form),
            Err(FormError::LeafWithoutFields)
        );
    }

    #[test]
    fn test_compound_without_child_list_is_an_error() {
        let mut surface = HeadlessSurface::new();
        let form = surface.create(Element::Form);
        let node = build_matcher(&mut surface, &MatcherNode::and(vec![], ["t"]));
        surface.append_child(form, node);

        let children = surface
            .find_child(node, |e| matches!(e, Element::ChildList))
            .unwrap();
        surface.remove(children);

        let err = extract_tree(&surface, form).unwrap_err();
        assert_eq!(err, FormError::MissingChildList);
        assert_eq!(
            err.to_string(),
            "malformed tree: compound node missing matcher container"
        );
    }

    #[test]
    fn test_missing_tags_field_is_an_error() {
        let mut surface = HeadlessSurface::new();
        let form = surface.create(Element::Form);
        let node = build_matcher(&mut surface, &MatcherNode::class(["a"], ["t"]));
        surface.append_child(form, node);

        let tags = surface
            .find_child(node, |e| matches!(e, Element::Field { .. }))
            .unwrap();
        surface.remove(tags);

        assert_eq!(
            extract_tree(&surface, form),
            Err(FormError::MissingTagsField)
        );
    }

    #[test]
    fn test_first_child_list_wins() {
        let mut surface = HeadlessSurface::new();
        let form = surface.create(Element::Form);
        let node = build_matcher(
            &mut surface,
            &MatcherNode::or(vec![MatcherNode::name(["a"], ["t"])], ["x"]),
        );
        surface.append_child(form, node);

        // A later, empty child list must not shadow the first one
        let stray = surface.create(Element::ChildList);
        surface.append_child(node, stray);

        let extracted = extract_tree(&surface, form).unwrap();
        assert_eq!(
            extracted,
            vec![MatcherNode::or(vec![MatcherNode::name(["a"], ["t"])], ["x"])]
        );
    }
}
