pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod paths;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod types;

pub use error::{ActionsError, Result};
pub use resolver::{ActionOption, ActionResponse, AvailableActionsResolver};
