use crate::platform::Surface;

/// Text rendering of the tree under `root`, one line per node:
/// `#<id> <element>`, indented two spaces per level.
pub fn outline<S: Surface>(surface: &S, root: S::Handle) -> Vec<String> {
    let mut lines = Vec::new();
    walk(surface, root, 0, &mut lines);
    lines
}

fn walk<S: Surface>(surface: &S, node: S::Handle, depth: usize, lines: &mut Vec<String>) {
    let Some(element) = surface.element(node) else {
        return;
    };
    let mut line = format!(
        "{}#{} {}",
        "  ".repeat(depth),
        surface.raw_id(node),
        element
    );
    if surface.is_hidden(node) {
        line.push_str(" (hidden)");
    }
    lines.push(line);

    for child in surface.children(node) {
        walk(surface, child, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Element;
    use crate::form::build_form;
    use crate::platform::HeadlessSurface;
    use matchform_ipc::MatcherNode;

    #[test]
    fn test_outline_of_leaf() {
        let mut surface = HeadlessSurface::new();
        let form = build_form(&mut surface, &[MatcherNode::name(["Firefox"], ["browser"])]);
        let lines = outline(&surface, form);

        assert_eq!(lines[0], "#0 form");
        assert_eq!(lines[1], "  #1 matcher type=name");
        assert_eq!(lines[2], "    #2 text \"Window Name Matcher\"");
        assert!(lines
            .iter()
            .any(|l| l.trim_start().ends_with("input \"Firefox\"")));
        assert!(lines
            .iter()
            .any(|l| l.trim_start().ends_with("input \"browser\"")));
        assert!(lines.last().unwrap().ends_with("button \"and\" -> add-child:and"));
    }

    #[test]
    fn test_outline_marks_hidden_nodes() {
        let mut surface = HeadlessSurface::new();
        let root = surface.create(Element::Form);
        let sep = surface.create(Element::Separator);
        surface.append_child(root, sep);
        surface.set_hidden(sep, true);

        assert_eq!(
            outline(&surface, root),
            vec!["#0 form".to_string(), "  #1 separator (hidden)".to_string()]
        );
    }
}
