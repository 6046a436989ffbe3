mod console;
mod template_store;

pub use console::Console;
pub use template_store::TemplateStore;
