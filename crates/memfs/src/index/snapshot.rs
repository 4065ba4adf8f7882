//! Nested, display-oriented snapshots of a subtree.

use serde::Serialize;

use crate::error::{NamespaceError, Result};
use crate::storage::{FolderId, NodeId, NodeKind};

use super::data::NamespaceData;

/// One node of a snapshot. Folders always carry `children` (possibly
/// empty); files never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Draws the subtree as an indented listing, one entry per line:
    ///
    /// ```text
    /// - docs
    ///   |- notes.txt
    ///   |- reports
    ///   |  |- q1.txt
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            if depth > 0 {
                out.push_str(&"  |".repeat(depth));
            }
            out.push_str("- ");
            out.push_str(&node.name);
            out.push('\n');
            if let Some(children) = &node.children {
                stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
            }
        }
        out
    }
}

struct Frame {
    node: TreeNode,
    pending: std::vec::IntoIter<NodeId>,
}

/// Builds the snapshot of `folder` and everything below it, children in
/// tree-index order. Iterative, so depth is bounded only by memory.
pub fn build_snapshot(data: &NamespaceData, folder: FolderId) -> Result<TreeNode> {
    let mut stack = vec![folder_frame(data, folder)?];

    while let Some(frame) = stack.last_mut() {
        match frame.pending.next() {
            Some(NodeId::File(file)) => {
                let record = data.file(file)?;
                frame.node.children.get_or_insert_with(Vec::new).push(TreeNode {
                    id: file.into(),
                    name: record.name(),
                    kind: NodeKind::File,
                    children: None,
                });
            }
            Some(NodeId::Folder(sub)) => {
                let child = folder_frame(data, sub)?;
                stack.push(child);
            }
            None => {
                let Some(done) = stack.pop() else { break };
                match stack.last_mut() {
                    Some(parent) => parent
                        .node
                        .children
                        .get_or_insert_with(Vec::new)
                        .push(done.node),
                    None => return Ok(done.node),
                }
            }
        }
    }

    Err(NamespaceError::InvariantViolation(format!(
        "snapshot of {folder} ended without a root frame"
    )))
}

fn folder_frame(data: &NamespaceData, id: FolderId) -> Result<Frame> {
    let record = data.folder(id)?;
    let name = if record.parent().is_none() {
        "/".to_string()
    } else {
        record.name().to_string()
    };
    Ok(Frame {
        node: TreeNode {
            id: id.into(),
            name,
            kind: NodeKind::Folder,
            children: Some(Vec::new()),
        },
        pending: data.children(id)?.to_vec().into_iter(),
    })
}
