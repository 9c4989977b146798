//! LaTeX resume markup to HTML, for live preview
//!
//!     This crate converts a constrained subset of LaTeX (the handful of constructs a
//!     one-page resume uses) into HTML. It powers texprev-cli, but is shell agnostic: no
//!     code here reads env vars or prints to stdout.
//!
//! Architecture
//!
//!     There is no parser and no document tree. The translator ([`pipeline`]) is an ordered
//!     chain of whole-string regex substitutions followed by a line-oriented paragraph pass.
//!     Each substitution is a [`pipeline::Rule`]: a name, the [`pipeline::Construct`] it
//!     handles, a pattern and a replacement. Ordering is load-bearing and documented in
//!     ./pipeline/rules.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # render + optional write, in one call
//!     ├── samples.rs              # built-in sample resume
//!     ├── pipeline
//!     │   ├── construct.rs        # the recognized vocabulary
//!     │   ├── rules.rs            # the ordered rule chain
//!     │   ├── escape.rs           # HTML escaping of source text
//!     │   ├── paragraphs.rs       # final paragraph pass
//!     │   └── mod.rs              # translate / trace
//!     └── formats
//!         ├── html                # fragment and standalone page
//!         └── trace               # every intermediate stage, for debugging
//!
//! Failure Semantics
//!
//!     Translation is total. Unknown commands and malformed environments degrade into
//!     literal text inside a paragraph. Only the layers around the translator (format
//!     lookup, option parsing, file output) return [`FormatError`].
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to
//!     include these in tests/lib.rs.

pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod publish;
pub mod registry;
pub mod samples;

pub use error::FormatError;
pub use format::{Format, FormatOptions};
pub use pipeline::{trace, translate, translate_with_options, Stage, TranslateOptions};
pub use registry::FormatRegistry;
