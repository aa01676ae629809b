pub mod commands;
pub mod console;
pub mod consts;
pub mod exceptions;
pub mod fs;
pub mod models;
pub mod recordstore;
pub mod render;
