/// Catalog of items imported from providers
pub mod catalog;
/// Local player accessors supplied by the host
pub mod player;
/// Remote server item resolution and timeline pushes
pub mod remote;

pub use catalog::*;
pub use player::*;
pub use remote::*;
