//! This module defines [Document].

use std::{
    fs::{read_to_string, write},
    path::Path,
};

use crate::{error::Error, table::RuleTable};

/// Contains the content and name of a notation document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    /// Name of the document
    name: String,
    /// Content of the document
    content: String,
}

impl Document {
    /// Create a new [Document].
    pub fn new(name: String, content: String) -> Self {
        Self { name, content }
    }

    /// Load from the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let name = path.as_ref().to_string_lossy().to_string();
        let content = read_to_string(path.as_ref()).map_err(|error| Error::IoReading {
            error,
            filename: name.clone(),
        })?;

        Ok(Self::new(name, content))
    }

    /// Write the content of this document to the given path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        write(path.as_ref(), &self.content).map_err(|error| Error::IoWriting {
            error,
            filename: path.as_ref().to_string_lossy().to_string(),
        })
    }

    /// Rewrite the content with the given table, keeping the name.
    pub fn rewrite(&self, table: &RuleTable) -> Self {
        log::info!("rewriting {}", self.name);

        Self::new(self.name.clone(), table.rewrite(&self.content))
    }

    /// Return a reference to the content of this document.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Return a reference to the name of this document.
    pub fn name(&self) -> &str {
        &self.name
    }
}
