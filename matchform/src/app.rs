mod command;
mod dispatch;
mod effects;

use std::io::{BufRead, Write};

use anyhow::Result;
use matchform_ipc::{Command, Response};

use crate::config::ConfigStore;
use crate::editor::Editor;
use crate::platform::HeadlessSurface;

pub use command::process_command;
pub use dispatch::dispatch_command;
pub use effects::{execute_effects, Flow};

/// An editing session: one headless form plus the store it saves into.
pub struct Session {
    editor: Editor<HeadlessSurface>,
    store: ConfigStore,
}

impl Session {
    /// Start with the matchers currently in the store.
    pub fn new(store: ConfigStore) -> Result<Self> {
        let matchers = store.matchers()?;
        let mut editor = Editor::new(HeadlessSurface::new());
        editor.load(&matchers);
        Ok(Self { editor, store })
    }

    pub fn editor(&self) -> &Editor<HeadlessSurface> {
        &self.editor
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn handle_line(&mut self, line: &str) -> (Response, Flow) {
        match serde_json::from_str::<Command>(line) {
            Ok(cmd) => dispatch_command(&cmd, &mut self.editor, &mut self.store),
            Err(e) => {
                tracing::warn!("Invalid command: {}", e);
                (
                    Response::Error {
                        message: format!("Invalid command: {}", e),
                    },
                    Flow::Continue,
                )
            }
        }
    }

    /// Read one JSON command per line and answer each with one JSON line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (response, flow) = self.handle_line(&line);
            serde_json::to_writer(&mut output, &response)?;
            writeln!(output)?;
            output.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        tracing::info!("Session finished");
        Ok(())
    }
}
