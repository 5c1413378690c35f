//! Box-drawing rendering of a directory tree.
//!
//! ```text
//! /
//! ├── notes.txt
//! └─┬ openme
//!   └── hello.txt
//! ```

use anyhow::Result;
use filestore::{DirHandle, Node};
use futures::future::BoxFuture;

/// A labelled node with children, built from a directory walk
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Walk `dir` depth-first. Children are visited in listing order.
pub fn build_tree(label: String, dir: DirHandle) -> BoxFuture<'static, Result<TreeNode>> {
    Box::pin(async move {
        let mut node = TreeNode::new(label);
        for child in dir.list().await? {
            let stat = child.stat().await?;
            let subtree = match child {
                Node::Directory(sub) => build_tree(stat.name, sub).await?,
                Node::File(_) => TreeNode::new(stat.name),
            };
            node.children.push(subtree);
        }
        Ok(node)
    })
}

pub fn format_tree(root: &TreeNode) -> String {
    let mut output = String::new();
    output.push_str(&root.label);
    output.push('\n');
    format_children(&mut output, &root.children, "");
    output
}

fn format_children(output: &mut String, children: &[TreeNode], prefix: &str) {
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        // Nodes with children get a tee so the subtree hangs off them
        let (connector, continuation) = match (child.children.is_empty(), is_last) {
            (true, true) => ("└──", ' '),
            (true, false) => ("├──", '│'),
            (false, true) => ("└─┬", ' '),
            (false, false) => ("├─┬", '│'),
        };

        output.push_str(prefix);
        output.push_str(connector);
        output.push(' ');
        output.push_str(&child.label);
        output.push('\n');

        if !child.children.is_empty() {
            let nested = format!("{}{} ", prefix, continuation);
            format_children(output, &child.children, &nested);
        }
    }
}
