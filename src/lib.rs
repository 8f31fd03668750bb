//! # wsdl2dts
//!
//! Translates the XML Schema types embedded in WSDL documents into TypeScript
//! declaration files.
//!
//! ## Features
//!
//! - Simple types to type aliases, string enumerations to literal unions
//! - Complex types to interfaces, including `complexContent` inheritance
//! - Top-level elements with inline complex types to interfaces
//! - Optional (`minOccurs="0"`, `nillable="true"`) and repeated
//!   (`maxOccurs="unbounded"`) fields
//! - Batch conversion of a whole folder, one `.d.ts` per document
//!
//! Only static type shapes are produced. Facets, imports and the WSDL
//! message/port/binding/service sections are ignored.
//!
//! ## Example
//!
//! ```rust
//! use wsdl2dts::{convert_str, EmitOptions};
//!
//! let xsd = r#"<schema>
//!   <simpleType name="Status">
//!     <restriction base="string">
//!       <enumeration value="Open"/>
//!       <enumeration value="Closed"/>
//!     </restriction>
//!   </simpleType>
//! </schema>"#;
//!
//! let translation = convert_str(xsd, &EmitOptions::default().with_header(false))?;
//! assert_eq!(translation.output, "export type Status = 'Open'\n| 'Closed';\n\n");
//! # Ok::<(), wsdl2dts::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;
pub mod config;

// Input
pub mod namespaces;
pub mod names;
pub mod loaders;
pub mod documents;
pub mod schema;

// Output
pub mod typegen;
pub mod batch;

// Re-exports for convenience
pub use batch::{convert_directory, convert_file, BatchReport};
pub use config::ConvertConfig;
pub use error::{Error, Result};
pub use names::NamingPolicy;
pub use typegen::{convert_str, Diagnostics, EmitOptions, Translation};

/// Version of the wsdl2dts library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
