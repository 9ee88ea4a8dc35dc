pub use corner::*;
pub use edge::*;
pub use tile_id::*;

mod corner;
mod edge;
mod tile_id;
