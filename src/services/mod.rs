mod console_stdio;
mod template_store_filesystem;

pub use console_stdio::StdioConsole;
pub use template_store_filesystem::FilesystemTemplateStore;
