//! Naming Validation
//!
//! Pure predicates gating every structural edit. Composite rules run in a fixed
//! order (name, then extension for files, then sibling uniqueness) and stop at
//! the first failure.

pub mod names;
pub mod siblings;

pub use names::{
    contains_forbidden_chars, trim_name, validate_extension, validate_name, FORBIDDEN_CHARS,
};
pub use siblings::{check_file_name_unique, check_folder_name_unique};

use crate::error::ValidationError;
use crate::tree::Tree;

/// Validate a new folder `name` under `parent_id`.
pub fn validate_folder_creation(
    tree: &Tree,
    parent_id: &str,
    name: &str,
) -> Result<(), ValidationError> {
    validate_name(name)?;
    check_folder_name_unique(tree, parent_id, name, None)
}

/// Validate a new file `name.ext` under `parent_id`.
pub fn validate_file_creation(
    tree: &Tree,
    parent_id: &str,
    name: &str,
    ext: &str,
) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_extension(ext)?;
    check_file_name_unique(tree, parent_id, name, ext, None)
}

/// Validate renaming file `file_id` to `new_name.new_ext`.
///
/// Passes when `file_id` is not a file; existence is checked by the caller.
pub fn validate_file_rename(
    tree: &Tree,
    file_id: &str,
    new_name: &str,
    new_ext: &str,
) -> Result<(), ValidationError> {
    let Some(file) = tree.file(file_id) else {
        return Ok(());
    };

    validate_name(new_name)?;
    validate_extension(new_ext)?;

    match file.parent_id.as_deref() {
        Some(parent_id) => check_file_name_unique(tree, parent_id, new_name, new_ext, Some(file_id)),
        None => Ok(()),
    }
}

/// Validate renaming folder `folder_id` to `new_name`.
///
/// Passes when `folder_id` is not a folder; existence is checked by the caller.
pub fn validate_folder_rename(
    tree: &Tree,
    folder_id: &str,
    new_name: &str,
) -> Result<(), ValidationError> {
    let Some(folder) = tree.folder(folder_id) else {
        return Ok(());
    };

    validate_name(new_name)?;

    match folder.parent_id.as_deref() {
        Some(parent_id) => check_folder_name_unique(tree, parent_id, new_name, Some(folder_id)),
        None => Ok(()),
    }
}
