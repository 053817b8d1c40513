use matchform_ipc::MatcherNode;

use crate::core::{Element, FormError};
use crate::form::{self, Activation};
use crate::platform::Surface;
use crate::render;

/// One loaded document on a surface. Loading again discards the previous form.
#[derive(Debug)]
pub struct Editor<S: Surface> {
    surface: S,
    form: Option<S::Handle>,
}

impl<S: Surface> Editor<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            form: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn form(&self) -> Option<S::Handle> {
        self.form
    }

    pub fn load(&mut self, nodes: &[MatcherNode]) -> S::Handle {
        if let Some(previous) = self.form.take() {
            self.surface.remove(previous);
            self.surface.reclaim();
        }
        let form = form::build_form(&mut self.surface, nodes);
        self.form = Some(form);
        form
    }

    pub fn extract(&self) -> Result<Vec<MatcherNode>, FormError> {
        let form = self.form.ok_or(FormError::NoForm)?;
        form::extract_tree(&self.surface, form)
    }

    pub fn activate(&mut self, raw: u32) -> Result<Activation<S::Handle>, FormError> {
        let button = self.resolve(raw)?;
        form::activate(&mut self.surface, button)
    }

    pub fn hover(&mut self, raw: u32, inside: bool) -> Result<(), FormError> {
        let button = self.resolve(raw)?;
        form::hover(&mut self.surface, button, inside)
    }

    /// Set the text of an input, or of the input inside a field unit.
    pub fn set_value(&mut self, raw: u32, value: String) -> Result<(), FormError> {
        let node = self.resolve(raw)?;
        let input = match self.surface.element(node) {
            Some(Element::Field { .. }) => self
                .surface
                .children(node)
                .into_iter()
                .find(|&c| self.surface.value(c).is_some())
                .ok_or(FormError::NotAnInput(raw))?,
            _ => node,
        };
        if self.surface.set_value(input, value) {
            Ok(())
        } else {
            Err(FormError::NotAnInput(raw))
        }
    }

    pub fn outline(&self) -> Vec<String> {
        self.form
            .map(|form| render::outline(&self.surface, form))
            .unwrap_or_default()
    }

    fn resolve(&self, raw: u32) -> Result<S::Handle, FormError> {
        self.surface.resolve(raw).ok_or(FormError::UnknownNode(raw))
    }
}
