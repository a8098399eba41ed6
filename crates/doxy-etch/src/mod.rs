//! doxy-etch: Doxygen XML extractor for C API reference pages
//!
//! This crate turns the XML Doxygen produces for a C header into normalized
//! records ready for templating:
//! - Typedefs, with the documentation and fields of the struct they alias
//! - Variables and struct fields
//! - Preprocessor macros, with their parameter signature and value
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐      ┌──────────────────────┐
//! │ krb5_8hin.xml   │      │ struct__krb5__*.xml  │
//! │ (memberdefs)    │      │ (compounddefs)       │
//! └────────┬────────┘      └──────────┬───────────┘
//!          │   typedef ─── refid ────►│
//!          ▼                          ▼
//!   ┌─────────────┐           ┌──────────────┐
//!   │  Extractor  │◄──merge───│ CompoundDoc  │
//!   └──────┬──────┘           └──────────────┘
//!          ▼
//!    ┌───────────┐     ┌──────────────────┐
//!    │ DocRecord │────►│ TemplateRenderer │──► <name>.rst
//!    └───────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use doxy_etch::{DoxyConfig, Extractor, KindFilter};
//!
//! let extractor = Extractor::new(DoxyConfig::new("build/doc/xml")).unwrap();
//! let typedefs = KindFilter::from_iter(["typedef"]);
//! for record in extractor.run("krb5_8hin.xml", Some(&typedefs)).unwrap() {
//!     println!("{} ({} attributes)", record.name, record.attributes.len());
//! }
//! ```

// Core types
pub mod config;
pub mod diagnostics;
pub mod record;

// Tree access and text reconstruction
pub mod description;
pub mod para;
pub mod types;
pub mod xml;

// Extractors
pub mod compound;
pub mod define;
pub mod extractor;
pub mod member;
pub mod typedef;
pub mod variable;

// Output
pub mod printer;
pub mod render;
pub mod test;

// Re-exports for convenience
pub use compound::{merge_compound, CompoundLookup};
pub use config::DoxyConfig;
pub use diagnostics::{DoxyError, DoxyResult};
pub use extractor::{Extractor, KindFilter, MemberKind};
pub use printer::RecordPrinter;
pub use record::{CompoundDoc, DocRecord, RecordCategory};
pub use render::{OutputWriter, RecordRenderer, TemplateRenderer, TemplateSet};
pub use types::{MacroStripper, ResolvedType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
