use std::fmt;

use super::DocumentCapability;

/// Finds the document the user is currently looking at.
///
/// Host state can change between calls, so callers must be ready for
/// `None` every time. The returned handle is only borrowed for the current
/// action.
pub trait CapabilityLocator {
    fn locate_document(&mut self) -> Option<&mut dyn DocumentCapability>;
}

/// A locator for a document that is already known, or known to be absent.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator<D> {
    document: Option<D>,
}

impl<D> FixedLocator<D> {
    pub fn new(document: D) -> Self {
        Self {
            document: Some(document),
        }
    }

    #[must_use]
    pub fn absent() -> Self {
        Self { document: None }
    }

    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> Option<&mut D> {
        self.document.as_mut()
    }

    pub fn into_inner(self) -> Option<D> {
        self.document
    }
}

impl<D> CapabilityLocator for FixedLocator<D>
where
    D: DocumentCapability,
{
    fn locate_document(&mut self) -> Option<&mut dyn DocumentCapability> {
        self.document
            .as_mut()
            .map(|document| document as &mut dyn DocumentCapability)
    }
}

/// A host's element tree, as seen at the moment of the query.
pub trait HostTree {
    type Node: Copy + fmt::Debug;

    fn root(&self) -> Option<Self::Node>;

    /// The children of `node`, in display order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Whether `node` is rendered and lies horizontally within the
    /// viewport.
    fn is_displayed(&self, node: Self::Node) -> bool;

    fn has_document(&self, node: Self::Node) -> bool;

    fn document(&mut self, node: Self::Node) -> Option<&mut dyn DocumentCapability>;
}

/// Picks the first displayed document in a [`HostTree`], in pre-order.
#[derive(Debug)]
pub struct TreeLocator<T> {
    tree: T,
}

impl<T> TreeLocator<T>
where
    T: HostTree,
{
    pub fn new(tree: T) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn into_inner(self) -> T {
        self.tree
    }

    /// The node that [`CapabilityLocator::locate_document`] would return.
    pub fn find_document_node(&self) -> Option<T::Node> {
        let mut stack: Vec<T::Node> = self.tree.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            if self.tree.has_document(node) && self.tree.is_displayed(node) {
                return Some(node);
            }
            let mut children = self.tree.children(node);
            children.reverse();
            stack.extend(children);
        }
        None
    }
}

impl<T> CapabilityLocator for TreeLocator<T>
where
    T: HostTree,
{
    fn locate_document(&mut self) -> Option<&mut dyn DocumentCapability> {
        let Some(node) = self.find_document_node() else {
            log::debug!("no displayed document in host tree");
            return None;
        };
        log::trace!("located document at {node:?}");
        self.tree.document(node)
    }
}
