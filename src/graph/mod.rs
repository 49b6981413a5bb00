pub mod traits;
pub mod edge_list;
pub mod generators;

pub use traits::Graph;
pub use edge_list::{Edge, EdgeList};
