//! Parser for the Warcraft 3 MDL text model format.
//!
//! MDL is the human-readable twin of the binary MDX format: a nested
//! brace-delimited description of skeletal nodes, geometry sets,
//! materials, animated property tracks, emitters, cameras and lights.
//! [`parse`] turns MDL source text into a [`Model`] scene graph that
//! renderers, exporters and format converters consume.
//!
//! ```
//! let model = mdl_parser::parse("Version { FormatVersion 800, }").unwrap();
//! assert_eq!(model.version, 800);
//! ```

mod error;
pub mod material;
pub mod model;
mod parser;

pub use error::SyntaxError;
pub use model::*;
pub use parser::parse;
