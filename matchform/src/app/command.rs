use matchform_ipc::{Command, MatcherNode, Response, MAX_DEPTH};

use crate::core::FormError;
use crate::editor::Editor;
use crate::effect::CommandResult;
use crate::form::Activation;
use crate::platform::Surface;

/// Pure function: applies a command to the editor and returns a response with effects.
/// Persisting and quitting are left to the caller through the effects.
pub fn process_command<S: Surface>(editor: &mut Editor<S>, cmd: &Command) -> CommandResult {
    match cmd {
        Command::Load { matchers } => {
            editor.load(matchers);
            CommandResult::ok()
        }
        Command::Extract => match editor.extract() {
            Ok(matchers) => CommandResult::with_response(Response::Matchers { matchers }),
            Err(e) => CommandResult::error(e.to_string()),
        },
        Command::Save => match editor.extract().and_then(check_depth) {
            Ok(matchers) => CommandResult::persist(matchers),
            Err(e) => CommandResult::error(e.to_string()),
        },
        Command::Activate { node } => match editor.activate(*node) {
            Ok(Activation::Inserted(nodes)) => CommandResult::with_response(Response::Activated {
                inserted: raw_ids(editor, &nodes),
                removed: vec![],
            }),
            Ok(Activation::Removed(nodes)) => CommandResult::with_response(Response::Activated {
                inserted: vec![],
                removed: raw_ids(editor, &nodes),
            }),
            Ok(Activation::Toggled { .. }) => CommandResult::ok(),
            Err(e) => CommandResult::error(e.to_string()),
        },
        Command::Hover { node, inside } => match editor.hover(*node, *inside) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::error(e.to_string()),
        },
        Command::SetValue { node, value } => match editor.set_value(*node, value.clone()) {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::error(e.to_string()),
        },
        Command::Outline => CommandResult::with_response(Response::Outline {
            lines: editor.outline(),
        }),
        Command::Quit => CommandResult::quit(),
    }
}

/// Reject documents the config store could not read back.
fn check_depth(matchers: Vec<MatcherNode>) -> Result<Vec<MatcherNode>, FormError> {
    let depth = matchers.iter().map(MatcherNode::depth).max().unwrap_or(0);
    if depth > MAX_DEPTH {
        return Err(FormError::TooDeep {
            depth,
            limit: MAX_DEPTH,
        });
    }
    Ok(matchers)
}

fn raw_ids<S: Surface>(editor: &Editor<S>, nodes: &[S::Handle]) -> Vec<u32> {
    nodes.iter().map(|&n| editor.surface().raw_id(n)).collect()
}
