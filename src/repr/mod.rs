/*!
# Graph Representations

[`DiGraph`] is the only graph type; it is generic over the [`EdgeList`] used to
store outgoing edges. Vertices are addressed by keys externally and by [`Slot`]s
internally, see [`SlotStore`].
*/

use crate::{ops::*, *};

mod digraph;
mod edge_list;
mod slots;
mod vertex_set;

pub use digraph::*;
pub use edge_list::*;
pub use slots::*;
pub use vertex_set::*;
