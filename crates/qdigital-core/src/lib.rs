//! # qdigital-core - Core Domain Types
//!
//! Foundation crate for the qdigital. site. Provides page identifiers, site
//! content, the display-instruction tree, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Pages (`page`)
//! - [`Page`] - The closed set of site pages
//! - [`Route`] - Navigation target; unknown identifiers become [`Route::NotFound`]
//!
//! ### Content (`content`)
//! - [`Content`] - Every list and block of copy the pages display
//! - [`Testimonial`] - One carousel slide
//! - [`load_content()`] - Read and validate a TOML content file
//!
//! ### Views (`view`)
//! - [`ViewTree`] - Rendered page: title plus display instructions
//! - [`Node`] - A single display instruction
//! - [`Control`] - An action reachable from the view
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use qdigital_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod page;
pub mod view;

/// Prelude for common imports used throughout all qdigital crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{load_content, BlogPost, Content, Cta, Testimonial};
pub use error::{Error, Result, ResultExt};
pub use page::{Page, Route, UnknownPage};
pub use view::{Control, Node, ViewTree};
