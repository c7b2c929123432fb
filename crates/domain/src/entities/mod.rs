pub mod folder;
pub mod folder_product;
pub mod ids;
pub mod product;
pub mod user;

pub use folder::*;
pub use folder_product::*;
pub use ids::*;
pub use product::*;
pub use user::*;
