use matchform_ipc::MatcherKind;

use crate::core::{Affordance, Element, FieldRole};
use crate::platform::Surface;

pub const PATTERN_LABEL: &str = "Matches:";
pub const TAGS_LABEL: &str = "tags";
pub const ADD_PATTERN_LABEL: &str = "+";
pub const DELETE_LABEL: &str = "-";
pub const REMOVE_FIELD_LABEL: &str = "Remove Match";
pub const HIDE_LABEL: &str = "Hide";
pub const SHOW_LABEL: &str = "Show";

pub fn matcher_label(kind: MatcherKind) -> String {
    match kind {
        MatcherKind::Name => "Window Name Matcher".to_string(),
        MatcherKind::Class => "Window Class Matcher".to_string(),
        MatcherKind::And | MatcherKind::Or => format!("{} Matcher", kind),
    }
}

pub fn label<S: Surface>(surface: &mut S, text: impl Into<String>) -> S::Handle {
    surface.create(Element::Text(text.into()))
}

pub fn separator<S: Surface>(surface: &mut S) -> S::Handle {
    surface.create(Element::Separator)
}

pub fn button<S: Surface>(surface: &mut S, label: &str, affordance: Affordance) -> S::Handle {
    surface.create(Element::Button {
        label: label.to_string(),
        affordance,
    })
}

/// Removes the matcher container the button is placed in.
pub fn delete_button<S: Surface>(surface: &mut S) -> S::Handle {
    button(surface, DELETE_LABEL, Affordance::DeleteNode)
}

/// Hides or shows every sibling after the button.
pub fn visibility_toggle<S: Surface>(surface: &mut S) -> S::Handle {
    button(surface, HIDE_LABEL, Affordance::ToggleVisibility)
}

/// Label + input unit. Deletable fields carry their own remove button.
pub fn field<S: Surface>(
    surface: &mut S,
    value: &str,
    label: &str,
    role: FieldRole,
    deletable: bool,
) -> S::Handle {
    let unit = surface.create(Element::Field {
        label: label.to_string(),
        role,
    });
    let input = surface.create(Element::Input {
        value: value.to_string(),
    });
    surface.append_child(unit, input);
    if deletable {
        let remove = button(surface, REMOVE_FIELD_LABEL, Affordance::RemoveField);
        surface.append_child(unit, remove);
    }
    unit
}

pub fn pattern_field<S: Surface>(surface: &mut S, pattern: &str) -> S::Handle {
    field(surface, pattern, PATTERN_LABEL, FieldRole::Pattern, true)
}

pub fn tags_field<S: Surface>(surface: &mut S, tags: &[String]) -> S::Handle {
    field(surface, &join_tags(tags), TAGS_LABEL, FieldRole::Tags, false)
}

/// One add-child button per matcher kind.
pub fn add_matcher_menu<S: Surface>(surface: &mut S) -> S::Handle {
    let menu = surface.create(Element::MenuGroup);
    for kind in MatcherKind::MENU_ORDER {
        let choice = button(surface, kind.as_str(), Affordance::AddChild(kind));
        surface.append_child(menu, choice);
    }
    menu
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Inverse of [`join_tags`]. Empty input is no tags; empty entries between
/// commas are kept as empty tags.
pub fn split_tags(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}
