use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The id is stale or was issued by a different tree.
    #[error("invalid node id: {0:?}")]
    InvalidNode(NodeId),
}

pub type TreeResult<T> = Result<T, TreeError>;
