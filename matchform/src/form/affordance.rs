use matchform_ipc::{MatcherKind, MatcherNode};

use crate::core::{Affordance, Element, FormError};
use crate::platform::Surface;

use super::builder::build_matcher;
use super::controls::{pattern_field, separator, HIDE_LABEL, SHOW_LABEL};

/// What activating a button changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation<H> {
    Inserted(Vec<H>),
    Removed(Vec<H>),
    Toggled { hidden: bool },
}

/// Run the action bound to `button`.
pub fn activate<S: Surface>(
    surface: &mut S,
    button: S::Handle,
) -> Result<Activation<S::Handle>, FormError> {
    let affordance = button_affordance(surface, button)?;
    let parent = surface
        .parent(button)
        .ok_or_else(|| FormError::Detached(surface.raw_id(button)))?;
    tracing::debug!("Activating {} on node {}", affordance, surface.raw_id(button));

    match affordance {
        Affordance::AddPattern => Ok(add_pattern(surface, parent, button)),
        Affordance::RemoveField => Ok(remove_field(surface, parent)),
        Affordance::DeleteNode => delete_node(surface, parent),
        Affordance::AddChild(kind) => add_child(surface, parent, kind),
        Affordance::ToggleVisibility => Ok(toggle_visibility(surface, button)),
    }
}

/// Mouse enter/leave on a button. Only delete buttons react, by flagging
/// the container they would remove.
pub fn hover<S: Surface>(surface: &mut S, button: S::Handle, inside: bool) -> Result<(), FormError> {
    if button_affordance(surface, button)? != Affordance::DeleteNode {
        return Ok(());
    }
    let Some(target) = surface.parent(button) else {
        return Ok(());
    };
    if let Some(Element::Matcher { hovered, .. }) = surface.element_mut(target) {
        *hovered = inside;
    }
    Ok(())
}

fn button_affordance<S: Surface>(surface: &S, node: S::Handle) -> Result<Affordance, FormError> {
    match surface.element(node) {
        Some(Element::Button { affordance, .. }) => Ok(*affordance),
        Some(_) => Err(FormError::NotAButton(surface.raw_id(node))),
        None => Err(FormError::UnknownNode(surface.raw_id(node))),
    }
}

fn add_pattern<S: Surface>(
    surface: &mut S,
    patterns: S::Handle,
    button: S::Handle,
) -> Activation<S::Handle> {
    let sep = separator(surface);
    let unit = pattern_field(surface, "");
    surface.insert_before(patterns, sep, button);
    surface.insert_before(patterns, unit, button);
    Activation::Inserted(vec![sep, unit])
}

/// The separator before a field belongs to it. The first field has none,
/// so removing it leaves the separator of the next field in place.
fn remove_field<S: Surface>(surface: &mut S, unit: S::Handle) -> Activation<S::Handle> {
    let mut removed = Vec::new();
    if let Some(prev) = surface.previous_sibling(unit) {
        if surface.element(prev).is_some_and(Element::is_separator) {
            surface.remove(prev);
            removed.push(prev);
        }
    }
    surface.remove(unit);
    removed.push(unit);
    Activation::Removed(removed)
}

fn delete_node<S: Surface>(
    surface: &mut S,
    container: S::Handle,
) -> Result<Activation<S::Handle>, FormError> {
    if !matches!(surface.element(container), Some(Element::Matcher { .. })) {
        return Err(FormError::Detached(surface.raw_id(container)));
    }
    surface.remove(container);
    Ok(Activation::Removed(vec![container]))
}

fn add_child<S: Surface>(
    surface: &mut S,
    menu: S::Handle,
    kind: MatcherKind,
) -> Result<Activation<S::Handle>, FormError> {
    let list = surface
        .parent(menu)
        .ok_or_else(|| FormError::Detached(surface.raw_id(menu)))?;
    let node = build_matcher(surface, &MatcherNode::empty(kind));
    surface.insert_before(list, node, menu);
    Ok(Activation::Inserted(vec![node]))
}

fn toggle_visibility<S: Surface>(surface: &mut S, button: S::Handle) -> Activation<S::Handle> {
    let hidden = matches!(
        surface.element(button),
        Some(Element::Button { label, .. }) if label == HIDE_LABEL
    );
    for sibling in surface.following_siblings(button) {
        surface.set_hidden(sibling, hidden);
    }
    if let Some(Element::Button { label, .. }) = surface.element_mut(button) {
        *label = if hidden { SHOW_LABEL } else { HIDE_LABEL }.to_string();
    }
    Activation::Toggled { hidden }
}
