//! Project tree nodes as enumerated by the host

use serde::{Deserialize, Serialize};

/// Host-assigned identity of a project node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// One entry in the project tree, either a container or a leaf file
///
/// Children are kept in host enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub children: Vec<ProjectNode>,
}

impl ProjectNode {
    pub fn leaf(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: NodeId(id),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn container(id: u64, name: impl Into<String>, children: Vec<ProjectNode>) -> Self {
        Self {
            id: NodeId(id),
            name: name.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_children() {
        let node = ProjectNode::leaf(1, "main.cpp");
        assert!(node.is_leaf());
        assert_eq!(node.name, "main.cpp");
    }

    #[test]
    fn test_container_keeps_child_order() {
        let tree = ProjectNode::container(
            1,
            "src",
            vec![
                ProjectNode::leaf(2, "a.cpp"),
                ProjectNode::container(3, "include", vec![ProjectNode::leaf(4, "a.h")]),
            ],
        );
        assert!(!tree.is_leaf());
        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a.cpp", "include"]);
        assert_eq!(tree.children[1].children[0].id, NodeId(4));
    }
}
