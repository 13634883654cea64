//! JSON file persistence for the feedback store.
//!
//! The file holds a JSON array of [`FeedbackItem`] records, newest first. A
//! missing file is treated as an empty store so first runs need no setup.

use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::model::{FeedbackItem, MAX_RATING};
use super::store::FeedbackStore;
use crate::error::FeedbackError;

/// Loads stored items from `path`.
///
/// # Errors
///
/// Returns [`FeedbackError::Io`] when the file exists but cannot be read, or
/// [`FeedbackError::Serialization`] when it does not hold a JSON item array
/// or an item's rating is above [`MAX_RATING`].
pub fn load_items(path: &Utf8Path) -> Result<Vec<FeedbackItem>, FeedbackError> {
    let (dir, file_name) = open_parent_dir(path, false)?;

    let contents = match dir.read_to_string(file_name) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("feedback store '{path}' not found; starting empty");
            return Ok(Vec::new());
        }
        Err(error) => {
            return Err(FeedbackError::Io {
                message: format!("failed to read feedback store '{path}': {error}"),
            });
        }
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<FeedbackItem> = serde_json::from_str(&contents)?;
    if let Some(item) = items.iter().find(|item| item.rating > MAX_RATING) {
        return Err(FeedbackError::Serialization {
            message: format!(
                "feedback item {} in '{path}' has rating {} above {MAX_RATING}",
                item.id, item.rating
            ),
        });
    }

    Ok(items)
}

/// Loads a [`FeedbackStore`] from `path`.
///
/// # Errors
///
/// Propagates the errors of [`load_items`].
pub fn load_store(path: &Utf8Path) -> Result<FeedbackStore, FeedbackError> {
    load_items(path).map(FeedbackStore::from_items)
}

/// Writes every item in `store` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`FeedbackError::Serialization`] when encoding fails or
/// [`FeedbackError::Io`] when the file cannot be written.
pub fn save_store(path: &Utf8Path, store: &FeedbackStore) -> Result<(), FeedbackError> {
    let encoded = serde_json::to_string_pretty(store.items())?;
    let (dir, file_name) = open_parent_dir(path, true)?;

    dir.write(file_name, format!("{encoded}\n"))
        .map_err(|error| FeedbackError::Io {
            message: format!("failed to write feedback store '{path}': {error}"),
        })
}

/// Opens the directory containing `path` and returns it with the file name.
fn open_parent_dir(path: &Utf8Path, create: bool) -> Result<(Dir, &str), FeedbackError> {
    let file_name = path.file_name().ok_or_else(|| FeedbackError::Io {
        message: format!("invalid feedback store path '{path}': no file name"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    if create && !parent.is_dir() {
        create_missing_dirs(parent)?;
    }

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        FeedbackError::Io {
            message: format!("failed to open directory '{parent}': {error}"),
        }
    })?;

    Ok((dir, file_name))
}

/// Creates `parent` beneath its nearest existing ancestor.
///
/// The ancestor is opened directly so paths that climb with `..` stay inside
/// the directory that is opened.
fn create_missing_dirs(parent: &Utf8Path) -> Result<(), FeedbackError> {
    let (base_path, relative) = split_at_existing_ancestor(parent);
    let base = Dir::open_ambient_dir(base_path, ambient_authority()).map_err(|error| {
        FeedbackError::Io {
            message: format!("failed to open directory '{base_path}': {error}"),
        }
    })?;

    base.create_dir_all(relative)
        .map_err(|error| FeedbackError::Io {
            message: format!("failed to create directory '{parent}': {error}"),
        })
}

/// Splits `path` into its nearest existing ancestor and the remainder.
fn split_at_existing_ancestor(path: &Utf8Path) -> (&Utf8Path, &Utf8Path) {
    for ancestor in path.ancestors().skip(1) {
        let base = if ancestor.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            ancestor
        };
        if base.is_dir() {
            let relative = path.strip_prefix(ancestor).unwrap_or(path);
            return (base, relative);
        }
    }

    (Utf8Path::new("."), path)
}
