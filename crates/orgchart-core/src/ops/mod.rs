pub mod directory_ops;
pub mod employee_ops;
pub mod projection;
pub mod shared;
pub mod store;

pub use projection::project;
pub use shared::SharedDirectory;
pub use store::Directory;
