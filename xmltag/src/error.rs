use facet::Facet;
use indextree::NodeError;

/// Errors from tree mutation and document configuration.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum Error {
    /// cannot append a node to itself
    AppendToSelf,

    /// cannot append a node to one of its own descendants
    AppendToDescendant,

    /// node has been removed from the arena
    RemovedNode,

    /// the document root sentinel cannot be attached to the tree
    DocumentRootSentinel,

    /// unknown doctype {name}
    UnknownDoctype { name: String },
}

impl From<NodeError> for Error {
    fn from(err: NodeError) -> Self {
        match err {
            NodeError::Removed => Error::RemovedNode,
            NodeError::AppendAncestor | NodeError::PrependAncestor => Error::AppendToDescendant,
            _ => Error::AppendToSelf,
        }
    }
}
