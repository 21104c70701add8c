pub mod constants;
pub mod entrance;
pub mod mesh;
pub mod pointer;
pub mod scroll;
pub mod scrollspy;
pub mod stagger;
pub mod style;
pub mod visibility;

pub use constants::*;
pub use entrance::*;
pub use mesh::*;
pub use pointer::*;
pub use scroll::*;
pub use scrollspy::*;
pub use stagger::*;
pub use visibility::*;
