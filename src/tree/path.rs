//! Slash-path addressing and text rendering of the tree.
//!
//! Paths start at the root (`/`). Segments are matched case-insensitively after
//! trimming. [`resolve_path`] lets a final segment such as `notes.txt` match a
//! file before a folder of the same name; [`resolve_folder_path`] and
//! [`resolve_file_path`] only accept one kind.

use super::{Node, Tree};
use crate::types::NodeId;
use crate::validation::trim_name;
use std::collections::HashSet;

/// Spaces per depth level in [`render_tree`]
pub const INDENT_WIDTH: usize = 2;

fn normalize(value: &str) -> String {
    trim_name(value).to_lowercase()
}

/// Split `name.ext` at the last dot. `None` when either half is blank.
pub fn split_file_name(segment: &str) -> Option<(&str, &str)> {
    let (name, ext) = trim_name(segment).rsplit_once('.')?;
    if trim_name(name).is_empty() || trim_name(ext).is_empty() {
        return None;
    }
    Some((name, ext))
}

fn find_folder_child<'a>(tree: &'a Tree, folder_id: &str, segment: &str) -> Option<&'a Node> {
    let wanted = normalize(segment);
    tree.children(folder_id)
        .into_iter()
        .find(|node| node.is_folder() && normalize(node.name()) == wanted)
}

fn find_file_child<'a>(tree: &'a Tree, folder_id: &str, segment: &str) -> Option<&'a Node> {
    let (name, ext) = split_file_name(segment)?;
    let (name, ext) = (normalize(name), normalize(ext));
    tree.children(folder_id).into_iter().find(|node| {
        node.as_file()
            .map(|file| normalize(&file.name) == name && normalize(&file.ext) == ext)
            .unwrap_or(false)
    })
}

/// Folder id reached by every segment but the last, plus the last segment.
fn walk_to_parent<'p>(tree: &Tree, path: &'p str) -> Option<(NodeId, Option<&'p str>)> {
    tree.root()?;
    let mut segments: Vec<&str> = path
        .split('/')
        .map(trim_name)
        .filter(|segment| !segment.is_empty())
        .collect();
    let last = segments.pop();

    let mut current = tree.root_id().to_string();
    for segment in segments {
        current = find_folder_child(tree, &current, segment)?.id().to_string();
    }
    Some((current, last))
}

/// Resolve a slash path to a node id. A final segment matches a file before
/// a folder of the same name.
pub fn resolve_path(tree: &Tree, path: &str) -> Option<NodeId> {
    let (parent, last) = walk_to_parent(tree, path)?;
    let Some(segment) = last else {
        return Some(parent);
    };
    find_file_child(tree, &parent, segment)
        .or_else(|| find_folder_child(tree, &parent, segment))
        .map(|node| node.id().to_string())
}

/// Resolve a slash path whose final segment must name a folder.
pub fn resolve_folder_path(tree: &Tree, path: &str) -> Option<NodeId> {
    let (parent, last) = walk_to_parent(tree, path)?;
    match last {
        None => Some(parent),
        Some(segment) => find_folder_child(tree, &parent, segment).map(|node| node.id().to_string()),
    }
}

/// Resolve a slash path whose final segment must name a file as `name.ext`.
pub fn resolve_file_path(tree: &Tree, path: &str) -> Option<NodeId> {
    let (parent, last) = walk_to_parent(tree, path)?;
    find_file_child(tree, &parent, last?).map(|node| node.id().to_string())
}

/// Absolute slash path of a node, `/` for the root.
pub fn node_path(tree: &Tree, id: &str) -> Option<String> {
    let mut segments = Vec::new();
    let mut current = tree.get(id)?;

    while !tree.is_root(current.id()) {
        segments.push(current.display_name());
        if segments.len() > tree.len() {
            return None;
        }
        current = tree.get(current.parent_id()?)?;
    }

    segments.reverse();
    Some(format!("/{}", segments.join("/")))
}

/// Indented outline of the whole tree, children in insertion order.
pub fn render_tree(tree: &Tree) -> String {
    let mut lines = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![(tree.root_id().to_string(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let Some(node) = tree.get(&id) else {
            continue;
        };
        if !seen.insert(id.clone()) {
            continue;
        }
        let indent = " ".repeat(depth * INDENT_WIDTH);
        match node {
            Node::Folder(folder) => {
                lines.push(format!("{}{}/", indent, folder.name));
                for child in folder.children.iter().rev() {
                    stack.push((child.clone(), depth + 1));
                }
            }
            Node::File(file) => lines.push(format!("{}{}", indent, file.file_name())),
        }
    }

    lines.join("\n")
}
