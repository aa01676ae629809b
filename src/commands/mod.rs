pub mod add;
pub mod delete;
pub mod find;
pub mod list;
pub mod shell;
