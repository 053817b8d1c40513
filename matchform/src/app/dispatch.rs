use matchform_ipc::{Command, Response};

use super::command::process_command;
use super::effects::{execute_effects, Flow};
use crate::config::ConfigStore;
use crate::editor::Editor;
use crate::platform::Surface;

/// This function orchestrates process_command and execute_effects.
pub fn dispatch_command<S: Surface>(
    cmd: &Command,
    editor: &mut Editor<S>,
    store: &mut ConfigStore,
) -> (Response, Flow) {
    tracing::debug!("Dispatching {:?}", cmd);
    let result = process_command(editor, cmd);

    match execute_effects(result.effects, store) {
        Ok(flow) => (result.response, flow),
        Err(message) => {
            tracing::warn!("{}", message);
            (Response::Error { message }, Flow::Continue)
        }
    }
}
