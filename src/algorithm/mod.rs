//! Graph algorithms
mod shortest_path;
pub use self::shortest_path::*;
mod spanning_tree;
pub use self::spanning_tree::*;
mod strongly_connected;
pub use self::strongly_connected::*;
