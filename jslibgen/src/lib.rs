//! jslibgen - generate Emscripten JavaScript glue from native-interop
//! declarations
//!
//! - one `.jslib` (native-callable functions merged into the library) and one
//!   `.jspre` (host-side stubs and message relays) per container type
//! - declarations come from a [`DeclarationSource`], artifacts go to a
//!   [`FileStore`]
//! - output is deterministic; unchanged artifacts are never rewritten

pub mod codegen;
mod config;
mod driver;
pub mod manifest;
pub mod naming;
pub mod source;
pub mod store;
pub mod types;

pub use codegen::{ArtifactKind, GlueCodegen};
pub use config::{DEFAULT_OUTPUT_ROOT, GeneratorConfig};
pub use driver::{GenerationDriver, GenerationFailure, GenerationReport, GenerationStep};
pub use manifest::ManifestSource;
pub use source::DeclarationSource;
pub use store::{Checkout, CommandCheckout, FileStore, FsFileStore, WriteOutcome};
pub use types::{
    CallDeclaration, ContainerType, ContainerUnit, GeneratedArtifact, ParameterSpec, SemanticType,
};
