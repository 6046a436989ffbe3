pub mod assemble;
pub mod error;
pub mod template;

pub use assemble::assemble;
pub use error::AppError;
pub use template::{Template, TemplateCollection};
