use crate::config::ConfigStore;
use crate::effect::Effect;

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn execute_effects(effects: Vec<Effect>, store: &mut ConfigStore) -> Result<Flow, String> {
    let mut flow = Flow::Continue;
    for effect in effects {
        match effect {
            Effect::Persist { matchers } => {
                store
                    .set_matchers(&matchers)
                    .map_err(|e| format!("Failed to save matchers: {:#}", e))?;
                tracing::info!("Persisted {} matcher(s)", matchers.len());
            }
            Effect::Quit => flow = Flow::Quit,
        }
    }
    Ok(flow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchform_ipc::MatcherNode;

    #[test]
    fn test_persist_writes_store() {
        let mut store = ConfigStore::in_memory();
        let matchers = vec![MatcherNode::name(["a"], ["t"])];

        let flow = execute_effects(
            vec![Effect::Persist {
                matchers: matchers.clone(),
            }],
            &mut store,
        )
        .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(store.matchers().unwrap(), matchers);
    }

    #[test]
    fn test_quit_stops_session() {
        let mut store = ConfigStore::in_memory();
        assert_eq!(
            execute_effects(vec![Effect::Quit], &mut store).unwrap(),
            Flow::Quit
        );
        assert_eq!(
            execute_effects(vec![], &mut store).unwrap(),
            Flow::Continue
        );
    }
}
