use crate::domain::{AppError, TemplateCollection};

/// Port for loading the mad-lib template collection.
pub trait TemplateStore {
    /// Load every template, all-or-nothing and in source order.
    fn load(&self) -> Result<TemplateCollection, AppError>;
}
