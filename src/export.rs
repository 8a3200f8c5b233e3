//! Writing results to disk
//!
//! Two formats are produced: a plain-text download named
//! `<title>_<HHMMSS>.txt`, and a Markdown report named `<title>.md` that is
//! overwritten each time the same title is exported.

use crate::error::{MarketMindError, Result};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Writes exports into one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `content` as a timestamped text file
    ///
    /// # Errors
    ///
    /// Returns error if the title is empty or the file cannot be written
    pub fn export_text(&self, title: &str, content: &str) -> Result<PathBuf> {
        self.export_text_at(title, content, Local::now().naive_local())
    }

    /// Write `content` as a text file stamped with `at`
    pub fn export_text_at(&self, title: &str, content: &str, at: NaiveDateTime) -> Result<PathBuf> {
        let file_name = format!("{}_{}.txt", file_stem(title)?, at.format("%H%M%S"));
        self.write(&file_name, content)
    }

    /// Write `content` as a Markdown report headed by `title`
    ///
    /// # Errors
    ///
    /// Returns error if the title is empty or the file cannot be written
    pub fn export_report(&self, title: &str, content: &str) -> Result<PathBuf> {
        let file_name = format!("{}.md", file_stem(title)?);
        self.write(&file_name, &render_report(title, content))
    }

    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            MarketMindError::Export(format!(
                "Failed to create {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let path = self.output_dir.join(file_name);
        std::fs::write(&path, content).map_err(|e| {
            MarketMindError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!("Exported {}", path.display());
        Ok(path)
    }
}

/// Report body: a title heading followed by the content
pub fn render_report(title: &str, content: &str) -> String {
    format!("# {}\n\n{}\n", title.replace('_', " "), content.trim_end())
}

/// Turn a title into a safe file stem
///
/// Characters other than ASCII letters, digits, `-` and `_` become `_`.
fn file_stem(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(MarketMindError::Export("title cannot be empty".to_string()).into());
    }
    Ok(title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect())
}
