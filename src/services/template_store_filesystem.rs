use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, Template, TemplateCollection};
use crate::ports::TemplateStore;

/// Template store backed by a JSON file on disk.
pub struct FilesystemTemplateStore {
    path: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn malformed(&self, detail: impl Into<String>) -> AppError {
        AppError::DataFileMalformed { path: self.display_path(), detail: detail.into() }
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn load(&self) -> Result<TemplateCollection, AppError> {
        let contents = fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::DataFileNotFound { path: self.display_path() }
            } else {
                AppError::Io(err)
            }
        })?;

        let templates: Vec<Template> =
            serde_json::from_str(&contents).map_err(|err| self.malformed(err.to_string()))?;

        if templates.is_empty() {
            return Err(self.malformed("file contains no templates"));
        }

        Ok(TemplateCollection::new(templates))
    }
}
