//! Core data models for boilerplate generation

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Full template catalog: entity type name -> template group
///
/// Keys keep document order so pick lists are stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Template groups keyed by entity type (e.g. "Component", "Page")
    pub entity_types: IndexMap<String, TemplateGroup>,
}

impl Catalog {
    /// Look up the template group for an entity type
    pub fn entity_type(&self, name: &str) -> Option<&TemplateGroup> {
        self.entity_types.get(name)
    }

    /// Names of all entity types in document order
    pub fn entity_type_names(&self) -> Vec<&str> {
        self.entity_types.keys().map(String::as_str).collect()
    }

    /// Whether the catalog defines no entity types at all
    pub fn is_empty(&self) -> bool {
        self.entity_types.is_empty()
    }
}

/// Named templates available for one entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateGroup {
    /// Templates keyed by template name
    pub templates: IndexMap<String, Template>,
}

impl TemplateGroup {
    /// Look up a template by name
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Names of all templates in document order
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}

/// A file-tree blueprint: path template -> content lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    /// File specs keyed by path template
    pub files: IndexMap<String, Vec<String>>,
}

impl Template {
    /// Iterate over the file specs of this template
    pub fn file_specs(&self) -> impl Iterator<Item = FileSpec<'_>> {
        self.files.iter().map(|(path_template, lines)| FileSpec {
            path_template,
            lines,
        })
    }

    /// Number of file specs in this template
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the template declares no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// One (path template, content lines) pair of a template
#[derive(Debug, Clone, Copy)]
pub struct FileSpec<'a> {
    /// Path relative to the target root, may contain placeholders
    pub path_template: &'a str,
    /// File content, one entry per line, may contain placeholders
    pub lines: &'a [String],
}

/// A file spec that was not written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Raw path template from the catalog
    pub path_template: String,
    /// Why the file was skipped
    pub reason: String,
}

/// A file produced (or planned, in dry-run mode) by the materializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute destination path
    pub path: PathBuf,
    /// Path relative to the target root, `/`-separated
    pub relative_path: String,
    /// Substituted file body
    pub content: String,
}
