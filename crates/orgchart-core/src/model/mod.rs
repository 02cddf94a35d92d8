pub mod employee;
pub mod role;
pub mod view;

pub use employee::Employee;
pub use role::Role;
pub use view::EmployeeView;
