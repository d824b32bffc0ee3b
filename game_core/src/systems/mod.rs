pub mod collision;
pub mod crater;
pub mod flight;
pub mod placement;
pub mod terrain;
pub mod trajectory;
pub mod wind;

pub use collision::*;
pub use crater::*;
pub use flight::*;
pub use placement::*;
pub use terrain::*;
pub use trajectory::*;
pub use wind::*;
