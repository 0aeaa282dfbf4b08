// zipfscope-core/src/discovery.rs
//! Deterministic enumeration of the input corpus.
//!
//! The corpus root holds one subdirectory per logical group (typically one per
//! date). Discovery descends exactly one level into each matching subdirectory,
//! collects the regular files whose names match the file pattern and sorts
//! them by `(subdirectory name, file name)`. The resulting order does not
//! depend on how the filesystem happens to enumerate entries.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AnalysisConfig;
use crate::errors::AnalysisError;

/// Compiled name filters for subdirectories and files.
#[derive(Debug, Clone)]
pub struct FileFilter {
    subdir: Regex,
    file: Regex,
}

impl FileFilter {
    pub fn new(subdir_pattern: &str, file_pattern: &str) -> Result<Self, AnalysisError> {
        let subdir = Regex::new(subdir_pattern)
            .map_err(|e| AnalysisError::InvalidPattern("subdirectory".to_string(), e))?;
        let file = Regex::new(file_pattern)
            .map_err(|e| AnalysisError::InvalidPattern("file".to_string(), e))?;
        Ok(Self { subdir, file })
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        Self::new(&config.subdir_pattern, &config.file_pattern)
    }

    pub fn accepts_subdir(&self, name: &str) -> bool {
        self.subdir.is_match(name)
    }

    pub fn accepts_file(&self, name: &str) -> bool {
        self.file.is_match(name)
    }
}

/// One input file and the key it is sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    /// Name of the immediate subdirectory of the corpus root.
    pub group: String,
    pub name: String,
    pub path: PathBuf,
}

impl CorpusFile {
    /// `group/name`, the root-relative form used for fingerprints.
    pub fn relative_name(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }
}

/// The ordered, immutable list of input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    root: PathBuf,
    files: Vec<CorpusFile>,
}

impl Corpus {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[CorpusFile] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusFile> {
        self.files.iter()
    }

    /// Fails with [`AnalysisError::EmptyCorpus`] when discovery found nothing.
    pub fn require_non_empty(self) -> Result<Self, AnalysisError> {
        if self.files.is_empty() {
            return Err(AnalysisError::EmptyCorpus(self.root));
        }
        Ok(self)
    }

    /// Combined size of all files in bytes; unreadable metadata counts as 0.
    pub fn total_bytes(&self) -> u64 {
        self.files
            .iter()
            .map(|f| fs::metadata(&f.path).map(|m| m.len()).unwrap_or(0))
            .sum()
    }

    /// SHA-256 over the ordered root-relative file names, hex encoded.
    ///
    /// Two discoveries of an unchanged tree produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for file in &self.files {
            hasher.update(file.relative_name().as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}

/// Enumerates the corpus below `root`.
///
/// Returns [`AnalysisError::NotADirectory`] when `root` is missing or not a
/// directory. An empty result is returned as-is; callers decide whether that
/// is fatal (see [`Corpus::require_non_empty`]).
pub fn discover_corpus(root: &Path, filter: &FileFilter) -> Result<Corpus, AnalysisError> {
    if !root.is_dir() {
        return Err(AnalysisError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };

        let group_path = entry.path();
        if !group_path.is_dir() {
            continue;
        }

        let group = entry.file_name().to_string_lossy().into_owned();
        if !filter.accepts_subdir(&group) {
            debug!("Subdirectory '{}' does not match the subdirectory pattern.", group);
            continue;
        }

        let children = match fs::read_dir(&group_path) {
            Ok(children) => children,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", group_path.display(), e);
                continue;
            }
        };

        for child in children.flatten() {
            let path = child.path();
            if !path.is_file() {
                continue;
            }
            let name = child.file_name().to_string_lossy().into_owned();
            if filter.accepts_file(&name) {
                files.push(CorpusFile { group: group.clone(), name, path });
            }
        }
    }

    files.sort_by(|a, b| {
        (a.group.as_str(), a.name.as_str()).cmp(&(b.group.as_str(), b.name.as_str()))
    });

    info!("Discovered {} input files under {}.", files.len(), root.display());
    Ok(Corpus { root: root.to_path_buf(), files })
}

/// Discovery driven entirely by an [`AnalysisConfig`].
pub fn discover_from_config(config: &AnalysisConfig) -> Result<Corpus, AnalysisError> {
    let filter = FileFilter::from_config(config)?;
    discover_corpus(&config.corpus_root, &filter)
}
