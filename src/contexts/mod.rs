// Context modules for application state management
pub mod error;
pub mod settings;

pub use error::*;
pub use settings::*;
