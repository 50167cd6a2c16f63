//! The views module contains the components for all Layouts and Routes for our app.

mod catalog;
pub use catalog::Catalog;

mod shell;
pub use shell::Shell;
