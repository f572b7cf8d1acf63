use anyhow::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::config::Config;

/// Outcome of one patch attempt. Missing files and unmatched content are
/// expected results, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Pattern matched and the file was rewritten in place.
    Updated,
    /// File exists but the pattern is absent (already updated).
    AlreadyCurrent,
    /// File does not exist.
    Missing,
}

pub struct UrlPatcher {
    pattern: Regex,
}

impl UrlPatcher {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(Config::OLD_API_URL_PATTERN)?;
        Ok(Self { pattern })
    }

    /// Rewrite every occurrence of the hard-coded API_URL assignment in one
    /// file. Read or write failures on an existing file propagate as errors.
    pub fn patch_file(&self, path: &Path) -> Result<PatchOutcome> {
        if !path.exists() {
            return Ok(PatchOutcome::Missing);
        }

        let content = fs::read_to_string(path)?;

        if !self.pattern.is_match(&content) {
            return Ok(PatchOutcome::AlreadyCurrent);
        }

        let patched = self.pattern.replace_all(&content, Config::NEW_API_URL_BLOCK);
        fs::write(path, patched.as_ref())?;

        Ok(PatchOutcome::Updated)
    }
}
