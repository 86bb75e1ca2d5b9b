//! Storage boundary: the dataset JSON document.
//!
//! On disk the corpus is a single document with parallel `tweets` and
//! `sentimiento` arrays; in memory those pairs travel as combined records.
//! This crate owns the wire shape, the pairing validation between the two
//! representations, and whole-file load/save/backup.

use std::fs;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use redsim_common::{AnnotatedPost, Annotation, Corpus, Post, RedsimError, User};

/// The dataset document exactly as stored. `places` is pass-through state
/// owned by the map layer; it is never inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDoc {
    pub tweets: Vec<Post>,
    pub users: IndexMap<String, User>,
    pub places: serde_json::Value,
    pub sentimiento: Vec<Annotation>,
}

impl DatasetDoc {
    pub fn empty() -> Self {
        Self {
            tweets: Vec::new(),
            users: IndexMap::new(),
            places: serde_json::Value::Object(serde_json::Map::new()),
            sentimiento: Vec::new(),
        }
    }

    /// Zip the parallel arrays into combined records. A document whose
    /// arrays disagree in length or ids cannot uphold the 1:1 invariant
    /// and is rejected as malformed.
    pub fn into_corpus(self) -> Result<Corpus, RedsimError> {
        if self.tweets.len() != self.sentimiento.len() {
            return Err(RedsimError::MalformedDataset(format!(
                "tweets and sentimiento lengths differ: {} vs {}",
                self.tweets.len(),
                self.sentimiento.len()
            )));
        }

        let posts = self
            .tweets
            .into_iter()
            .zip(self.sentimiento)
            .enumerate()
            .map(|(i, (post, annotation))| {
                if post.id != annotation.id {
                    return Err(RedsimError::MalformedDataset(format!(
                        "annotation id mismatch at index {i}: {} vs {}",
                        post.id, annotation.id
                    )));
                }
                Ok(AnnotatedPost { post, annotation })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Corpus {
            users: self.users,
            posts,
            places: self.places,
        })
    }

    /// Split combined records back into the wire's parallel arrays.
    pub fn from_corpus(corpus: Corpus) -> Self {
        let (tweets, sentimiento) = corpus
            .posts
            .into_iter()
            .map(|ap| (ap.post, ap.annotation))
            .unzip();
        Self {
            tweets,
            users: corpus.users,
            places: corpus.places,
            sentimiento,
        }
    }
}

/// Load the document. A missing file is its own error variant so callers
/// can decide whether that is fatal.
pub fn load(path: &Path) -> Result<DatasetDoc, RedsimError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RedsimError::DatasetNotFound(path.display().to_string()));
        }
        Err(e) => {
            return Err(RedsimError::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        RedsimError::MalformedDataset(format!("{}: {e}", path.display()))
    })
}

/// Load, treating a missing file as an empty corpus. Malformed documents
/// are still fatal.
pub fn load_or_empty(path: &Path) -> Result<DatasetDoc, RedsimError> {
    match load(path) {
        Ok(doc) => Ok(doc),
        Err(RedsimError::DatasetNotFound(_)) => {
            info!(path = %path.display(), "no existing dataset, starting empty");
            Ok(DatasetDoc::empty())
        }
        Err(e) => Err(e),
    }
}

/// Persist the document, creating parent directories as needed.
pub fn save(path: &Path, doc: &DatasetDoc) -> Result<(), RedsimError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let content = serde_json::to_string_pretty(doc)
        .context("failed to serialize dataset")?;
    fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Byte-for-byte copy of the stored document, taken before any mutation.
pub fn backup(src: &Path, dst: &Path) -> Result<(), RedsimError> {
    fs::copy(src, dst)
        .with_context(|| format!("failed to back up {} to {}", src.display(), dst.display()))?;
    info!(backup = %dst.display(), "wrote backup copy");
    Ok(())
}
