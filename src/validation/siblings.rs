//! Sibling uniqueness rules.
//!
//! Folders and files live in separate namespaces: folders collide on name, files
//! on the (name, ext) pair. Comparison is case-insensitive on trimmed values.

use crate::error::{ValidationError, ValidationKind};
use super::names::trim_name;
use crate::tree::{Node, Tree};

fn normalize(value: &str) -> String {
    trim_name(value).to_lowercase()
}

/// Fail when a folder child of `parent_id` other than `exclude_id` already uses `name`.
///
/// Passes when the parent is missing or is not a folder.
pub fn check_folder_name_unique(
    tree: &Tree,
    parent_id: &str,
    name: &str,
    exclude_id: Option<&str>,
) -> Result<(), ValidationError> {
    let wanted = normalize(name);
    let duplicate = tree.children(parent_id).into_iter().any(|sibling| {
        matches!(sibling, Node::Folder(folder)
            if Some(folder.id.as_str()) != exclude_id && normalize(&folder.name) == wanted)
    });

    if duplicate {
        return Err(ValidationError::new(
            ValidationKind::Duplicate,
            "Name already exists",
        ));
    }

    Ok(())
}

/// Fail when a file child of `parent_id` other than `exclude_id` already uses `name.ext`.
///
/// Passes when the parent is missing or is not a folder.
pub fn check_file_name_unique(
    tree: &Tree,
    parent_id: &str,
    name: &str,
    ext: &str,
    exclude_id: Option<&str>,
) -> Result<(), ValidationError> {
    let wanted_name = normalize(name);
    let wanted_ext = normalize(ext);
    let duplicate = tree.children(parent_id).into_iter().any(|sibling| {
        matches!(sibling, Node::File(file)
            if Some(file.id.as_str()) != exclude_id
                && normalize(&file.name) == wanted_name
                && normalize(&file.ext) == wanted_ext)
    });

    if duplicate {
        return Err(ValidationError::new(
            ValidationKind::Duplicate,
            format!("{}.{} already exists", trim_name(name), trim_name(ext)),
        ));
    }

    Ok(())
}
