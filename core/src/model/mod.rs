pub mod repository;

mod album;
mod id_types;
mod location;
mod photo;
pub use album::*;
pub use id_types::*;
pub use location::*;
pub use photo::*;

mod util;
