use crate::core::SkipReason;
use crate::storage::{StorageBackend, StorageItem};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use tracing::debug;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Snapshot of the file names present in the output directory before the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedNames {
    names: HashSet<OsString>,
}

impl ProcessedNames {
    /// An unreadable or missing directory yields an empty set.
    pub fn load<S: StorageBackend + ?Sized>(storage: &S, directory: &Path) -> Self {
        match storage.list_items(directory) {
            Ok(items) => items.into_iter().map(|item| item.name).collect(),
            Err(error) => {
                debug!("No processed names loaded from {}: {error:#}", directory.display());
                Self::default()
            }
        }
    }

    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.names.contains(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<OsString>> FromIterator<N> for ProcessedNames {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything after the last `.`, or the whole name when there is none.
pub fn file_extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, extension)| extension)
}

pub fn is_image(name: impl AsRef<OsStr>) -> bool {
    // 拡張子は ASCII なので、置換文字が入っても判定は変わらない
    let name = name.as_ref().to_string_lossy();
    let extension = file_extension(&name).to_lowercase();
    ACCEPTED_EXTENSIONS.contains(&extension.as_str())
}

pub fn is_already_resized(name: impl AsRef<OsStr>, processed: &ProcessedNames) -> bool {
    processed.contains(name)
}

/// Returns why an entry is skipped, or `None` when it should be processed.
pub fn skip_reason(item: &StorageItem, processed: &ProcessedNames) -> Option<SkipReason> {
    if !item.is_file {
        Some(SkipReason::NotAFile)
    } else if !is_image(&item.name) {
        Some(SkipReason::NotAnImage)
    } else if is_already_resized(&item.name, processed) {
        Some(SkipReason::AlreadyResized)
    } else {
        None
    }
}

pub fn should_process(item: &StorageItem, processed: &ProcessedNames) -> bool {
    skip_reason(item, processed).is_none()
}
