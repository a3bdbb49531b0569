pub mod todo;
pub mod user;

pub use todo::{ListQuery, StatusUpdate, Todo, TodoInput, TodoPage, TodoStatus};
pub use user::{Credentials, User};
