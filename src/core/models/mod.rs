//! Model discovery and filtering.

mod fetch;
mod info;

pub use fetch::ModelLister;
pub use info::ModelInfo;
