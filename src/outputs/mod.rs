//! Output generation.
//!
//! # Submodules
//!
//! - [`html`]: Renders the item list into a complete static HTML page
//! - [`site`]: Writes that page to the configured path
//!
//! # Output Structure
//!
//! ```text
//! ./
//! └── index.html   # overwritten on every run
//! ```

pub mod html;
pub mod site;
