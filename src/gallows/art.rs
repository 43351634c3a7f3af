//! Gallows stage illustrations
//!
//! A `GallowsArt` is an ordered set of illustrations, one per miss count,
//! from the ground state up to the final (loss) state. The miss limit is
//! derived from the set size, so art and game rules cannot drift apart.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for an unusable illustration set
#[derive(Debug)]
pub enum AssetError {
    /// A stage inside the `0..=max` range has no asset
    StageMissing(usize),
    /// Fewer than two stages found; a round needs a ground state and at
    /// least one failure state
    NotEnoughStages(usize),
    /// An asset exists but could not be read
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StageMissing(index) => {
                write!(f, "Gallows stage {index} illustration is missing")
            }
            Self::NotEnoughStages(found) => {
                write!(f, "Found {found} gallows stage(s), need at least 2")
            }
            Self::Unreadable { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Ordered gallows illustrations, ground state first
#[derive(Debug, Clone)]
pub struct GallowsArt {
    stages: Vec<String>,
}

impl GallowsArt {
    /// The default illustration set compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            stages: super::STAGES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Load an illustration set from a directory of `state{N}.txt` files
    ///
    /// The highest numbered stage present determines the set size; every
    /// stage below it must exist too, so a gap produces an error rather than
    /// a silently shorter game.
    ///
    /// # Errors
    ///
    /// Returns `AssetError` if the directory cannot be read, a stage in the
    /// range is missing, or fewer than two stages are found.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| AssetError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut max_index: Option<usize> = None;
        for entry in entries {
            let entry = entry.map_err(|source| AssetError::Unreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            if let Some(index) = parse_stage_index(&entry.file_name().to_string_lossy()) {
                max_index = Some(max_index.map_or(index, |max| max.max(index)));
            }
        }

        let Some(max_index) = max_index else {
            return Err(AssetError::NotEnoughStages(0));
        };

        let mut stages = Vec::with_capacity(max_index + 1);
        for index in 0..=max_index {
            let path = dir.join(format!("state{index}.txt"));
            let text = fs::read_to_string(&path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    AssetError::StageMissing(index)
                } else {
                    AssetError::Unreadable { path, source }
                }
            })?;
            stages.push(text);
        }

        Self::from_stages(stages)
    }

    /// Build a set from already loaded stage texts
    ///
    /// # Errors
    ///
    /// Returns `AssetError::NotEnoughStages` for fewer than two stages.
    pub fn from_stages(stages: Vec<String>) -> Result<Self, AssetError> {
        if stages.len() < 2 {
            return Err(AssetError::NotEnoughStages(stages.len()));
        }
        Ok(Self { stages })
    }

    /// Number of stages in the set
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// The miss limit this set describes: one stage per miss beyond ground
    #[must_use]
    pub fn max_misses(&self) -> usize {
        self.stages.len() - 1
    }

    /// The illustration for a given miss count
    ///
    /// # Errors
    ///
    /// Returns `AssetError::StageMissing` if the miss count has no stage.
    pub fn stage(&self, misses: usize) -> Result<&str, AssetError> {
        self.stages
            .get(misses)
            .map(String::as_str)
            .ok_or(AssetError::StageMissing(misses))
    }
}

/// Parse a stage index out of a `state{N}.txt` file name
fn parse_stage_index(file_name: &str) -> Option<usize> {
    file_name
        .strip_prefix("state")?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}
