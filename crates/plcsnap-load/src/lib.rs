//! Project loading for plcsnap.
//!
//! The exporter only needs a [`Project`]: a language setting and a tree of
//! typed [`ProjectNode`]s. This crate defines the [`ProjectLoader`] seam that
//! produces one, the [`Credentials`] passed to protected projects, and a
//! [`JsonProjectLoader`] reading a JSON project description.
//!
//! # Example
//!
//! ```rust,no_run
//! use plcsnap_load::{Credentials, JsonProjectLoader, ProjectLoader};
//!
//! let loader = JsonProjectLoader::new();
//! let credentials = Credentials::new("engineer", "secret");
//! let project = loader.load("plant.json".as_ref(), Some(credentials)).unwrap();
//!
//! println!("{} stations", project.stations().count());
//! ```

mod credentials;
mod error;
mod json;

use std::path::Path;

pub use credentials::{Credentials, Password};
pub use error::LoadError;
pub use json::{JsonProjectLoader, Protection};

// Re-export core types for convenience
pub use plcsnap_core::{Project, ProjectNode};

/// Produces the in-memory project tree for a project path.
pub trait ProjectLoader {
    /// Load the project at `path`.
    ///
    /// `credentials` are consumed by the call and wiped when it returns.
    fn load(&self, path: &Path, credentials: Option<Credentials>) -> Result<Project, LoadError>;
}
