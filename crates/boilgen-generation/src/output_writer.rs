//! Output writer for generated entity files
//!
//! Turns a template's file specs into files under a target root:
//! - substitutes variables into the path and normalizes separators
//! - refuses paths that are absolute, climb above the root or contain reserved characters
//! - creates intermediate directories one segment at a time
//! - writes the substituted body, overwriting an existing file
//!
//! A file spec with an unusable path is skipped with a warning; an I/O failure
//! aborts the remaining writes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GenerationError, GenerationResult};
use crate::models::{FileSpec, GeneratedFile, SkippedFile, Template};
use crate::templates::engine::TemplateEngine;
use crate::templates::resolver::VariableSet;
use crate::templates::validation::PathValidator;

/// Configuration for output writing
#[derive(Debug, Clone, Default)]
pub struct OutputWriterConfig {
    /// Compute the result without touching the filesystem
    pub dry_run: bool,
}

/// Result of materializing one template
#[derive(Debug, Clone, Default)]
pub struct WriteResult {
    /// Files written (or planned, in dry-run mode), in catalog order
    pub files: Vec<GeneratedFile>,
    /// File specs that were skipped because of an unusable path
    pub skipped: Vec<SkippedFile>,
    /// Directories created by this run, outermost first
    pub directories_created: Vec<PathBuf>,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

impl WriteResult {
    /// Number of files written
    pub fn files_written(&self) -> usize {
        self.files.len()
    }

    /// Number of file specs skipped
    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Writes template file specs to disk
#[derive(Debug, Default)]
pub struct OutputWriter {
    config: OutputWriterConfig,
}

impl OutputWriter {
    /// Create a new output writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new output writer with custom configuration
    pub fn with_config(config: OutputWriterConfig) -> Self {
        Self { config }
    }

    /// Materialize every file spec of `template` under `target_root`
    ///
    /// # Arguments
    /// * `target_root` - Directory receiving the generated files
    /// * `template` - File specs to write
    /// * `variables` - Values substituted into paths and content
    ///
    /// # Returns
    /// Written and skipped files, or the first I/O error
    pub fn materialize(
        &self,
        target_root: &Path,
        template: &Template,
        variables: &VariableSet,
    ) -> GenerationResult<WriteResult> {
        let engine = TemplateEngine::new(variables);
        let mut result = WriteResult {
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        if !self.config.dry_run && !target_root.is_dir() {
            fs::create_dir_all(target_root).map_err(|e| GenerationError::io(target_root, e))?;
            result.directories_created.push(target_root.to_path_buf());
        }

        for spec in template.file_specs() {
            let segments = match Self::resolve_segments(&spec, &engine) {
                Ok(segments) => segments,
                Err(GenerationError::InvalidPathTemplate {
                    path_template,
                    reason,
                }) => {
                    warn!(
                        path_template = %path_template,
                        reason = %reason,
                        "Skipping file with invalid path"
                    );
                    result.skipped.push(SkippedFile {
                        path_template,
                        reason,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let content = engine.render_lines(spec.lines);
            let file = self.write_file(target_root, &segments, content, &mut result)?;
            result.files.push(file);
        }

        Ok(result)
    }

    /// Substitute and normalize the path of a file spec into plain segments
    fn resolve_segments(
        spec: &FileSpec<'_>,
        engine: &TemplateEngine<'_>,
    ) -> GenerationResult<Vec<String>> {
        let invalid = |reason: String| GenerationError::InvalidPathTemplate {
            path_template: spec.path_template.to_string(),
            reason,
        };

        if let Some(c) = PathValidator::first_reserved(spec.path_template) {
            return Err(invalid(format!("reserved character '{}'", c)));
        }

        let substituted = engine.render(spec.path_template).replace('\\', "/");
        normalize_relative_path(&substituted).map_err(invalid)
    }

    /// Create the directories leading to the file, then write it
    fn write_file(
        &self,
        target_root: &Path,
        segments: &[String],
        content: String,
        result: &mut WriteResult,
    ) -> GenerationResult<GeneratedFile> {
        let (file_name, dirs) = segments
            .split_last()
            .ok_or_else(|| GenerationError::InvalidPathTemplate {
                path_template: String::new(),
                reason: "empty file name".to_string(),
            })?;

        let mut current = target_root.to_path_buf();
        for dir in dirs {
            current.push(dir);
            if !self.config.dry_run && ensure_dir(&current)? {
                result.directories_created.push(current.clone());
            }
        }

        let path = current.join(file_name);

        if self.config.dry_run {
            debug!(file = %path.display(), "Dry-run: would write file");
        } else {
            debug!(file = %path.display(), "Writing file");
            fs::write(&path, &content).map_err(|e| GenerationError::io(&path, e))?;
        }

        Ok(GeneratedFile {
            path,
            relative_path: segments.join("/"),
            content,
        })
    }
}

/// Create `path` as a directory unless it already is one
///
/// # Returns
/// `true` if the directory was created by this call
fn ensure_dir(path: &Path) -> GenerationResult<bool> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(e) => Err(GenerationError::io(path, e)),
    }
}

/// Split a substituted, `/`-separated path into segments that stay under the root
///
/// Empty and `.` segments are dropped and `..` removes the previous segment.
/// The last segment is always the file; every earlier one is a directory,
/// even if it contains a dot.
pub fn normalize_relative_path(path: &str) -> Result<Vec<String>, String> {
    if path.starts_with('/') {
        return Err("absolute paths are not allowed".to_string());
    }

    if let Some(c) = PathValidator::first_reserved(path) {
        return Err(format!("substituted path contains reserved character '{}'", c));
    }

    // A trailing separator, `.` or `..` leaves no file name to write
    if matches!(path.rsplit('/').next(), Some("" | "." | "..")) {
        return Err("empty file name".to_string());
    }

    let mut segments: Vec<String> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if segments.pop().is_none() {
                    return Err("path escapes the target root".to_string());
                }
            }
            other => segments.push(other.to_string()),
        }
    }

    if segments.is_empty() {
        return Err("empty file name".to_string());
    }

    Ok(segments)
}
