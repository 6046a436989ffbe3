use crate::ports::{Console, TemplateStore};

/// Application context holding dependencies for session execution.
pub struct AppContext<S: TemplateStore, C: Console> {
    templates: S,
    console: C,
}

impl<S: TemplateStore, C: Console> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(templates: S, console: C) -> Self {
        Self { templates, console }
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a mutable reference to the console.
    pub fn console(&mut self) -> &mut C {
        &mut self.console
    }
}
