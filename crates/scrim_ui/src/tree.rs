//! Declarative tree building
//!
//! A [`UiNode`] describes a widget subtree before creation: a kind, its
//! props, and an ordered list of children. Building walks the tree
//! depth-first, strictly sequentially, creating each node via the matching
//! factory and injecting the just-created handle as every child's parent.
//! The parent injection always wins over whatever parent an inline child
//! node carries.

use scrim_core::{Result, WidgetHandle};
use scrim_host::Host;

use crate::builder::UiBuilder;
use crate::props::{BaseProps, ButtonProps, ContainerProps, ImageProps, TextProps};

/// One node of a declarative widget tree.
#[derive(Debug)]
pub struct UiNode {
    kind: NodeKind,
    children: Vec<UiNode>,
}

#[derive(Debug)]
enum NodeKind {
    Container(ContainerProps),
    Button(ButtonProps),
    Text(TextProps),
    Image(ImageProps),
}

impl NodeKind {
    fn common_mut(&mut self) -> &mut BaseProps {
        match self {
            Self::Container(props) => &mut props.common,
            Self::Button(props) => &mut props.common,
            Self::Text(props) => &mut props.common,
            Self::Image(props) => &mut props.common,
        }
    }
}

impl UiNode {
    pub fn container(props: ContainerProps) -> Self {
        Self {
            kind: NodeKind::Container(props),
            children: Vec::new(),
        }
    }

    pub fn button(props: ButtonProps) -> Self {
        Self {
            kind: NodeKind::Button(props),
            children: Vec::new(),
        }
    }

    pub fn text(props: TextProps) -> Self {
        Self {
            kind: NodeKind::Text(props),
            children: Vec::new(),
        }
    }

    pub fn image(props: ImageProps) -> Self {
        Self {
            kind: NodeKind::Image(props),
            children: Vec::new(),
        }
    }

    /// Append one child node.
    pub fn child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children in order.
    pub fn children(mut self, children: impl IntoIterator<Item = UiNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Handle tree mirroring the input [`UiNode`] tree, for callers that need
/// to reference nested elements after the build.
#[derive(Clone, Debug)]
pub struct HandleNode {
    pub handle: WidgetHandle,
    pub children: Vec<HandleNode>,
}

impl UiBuilder {
    /// Build a declarative tree, returning the root handle.
    ///
    /// A node is never created before its parent exists; siblings are
    /// created in list order. A failure aborts the remaining descendants
    /// of this call with no automatic cleanup of already-created nodes.
    pub fn build(&mut self, host: &mut dyn Host, node: UiNode) -> Result<WidgetHandle> {
        Ok(self.build_node(host, node)?.handle)
    }

    /// Build a declarative tree, returning the full handle tree.
    pub fn build_tree(&mut self, host: &mut dyn Host, node: UiNode) -> Result<HandleNode> {
        self.build_node(host, node)
    }

    fn build_node(&mut self, host: &mut dyn Host, node: UiNode) -> Result<HandleNode> {
        let UiNode { kind, children } = node;
        let handle = match kind {
            NodeKind::Container(props) => self.container(host, props)?,
            NodeKind::Button(props) => self.button(host, props)?,
            NodeKind::Text(props) => self.text(host, props)?,
            NodeKind::Image(props) => self.image(host, props)?,
        };

        let mut built = Vec::with_capacity(children.len());
        for mut child in children {
            // The handle just created for this node is the child's parent,
            // regardless of what the inline child node says.
            child.kind.common_mut().parent = Some(handle);
            built.push(self.build_node(host, child)?);
        }

        Ok(HandleNode {
            handle,
            children: built,
        })
    }
}
