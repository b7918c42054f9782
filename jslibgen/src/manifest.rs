//! Load declaration manifests and apply the tagging rules to them
//!
//! A manifest mirrors what the native project declares: types with their
//! attributes, and per type the methods with attributes, visibility,
//! staticness and parameters. Order in the file is declaration order.
//!
//! ```json
//! { "types": [ { "name": "Foo", "namespace": "Bar.Baz", "attributes": ["JsLib"],
//!   "methods": [ { "name": "Foo_SayHi", "attributes": ["DllImport"], "static": true,
//!                  "parameters": [ { "name": "name", "type": "string" } ] } ] } ] }
//! ```
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use crate::source::DeclarationSource;
use crate::types::{CallDeclaration, ContainerType, ParameterSpec, SemanticType};

/// marks a type as a generation target
pub const CONTAINER_ATTRIBUTE: &str = "JsLib";
/// marks a static, non-public method as implemented in a `.jslib`
pub const NATIVE_ATTRIBUTE: &str = "DllImport";
/// marks a public method as a receiver for script-side relays
pub const CALLBACK_ATTRIBUTE: &str = "JsCallback";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    #[default]
    Private,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl ParameterEntry {
    fn to_spec(&self) -> ParameterSpec {
        ParameterSpec {
            name: self.name.clone(),
            semantic_type: semantic_type_of(&self.ty),
        }
    }
}

impl MethodEntry {
    fn is_native_exposed(&self) -> bool {
        self.is_static
            && self.visibility != Visibility::Public
            && has_attribute(&self.attributes, NATIVE_ATTRIBUTE)
    }

    fn is_callback(&self) -> bool {
        self.visibility == Visibility::Public && has_attribute(&self.attributes, CALLBACK_ATTRIBUTE)
    }

    // DllImport on a public or instance method
    fn native_tag_ignored(&self) -> bool {
        has_attribute(&self.attributes, NATIVE_ATTRIBUTE) && !self.is_native_exposed()
    }

    // JsCallback on a non-public method
    fn callback_tag_ignored(&self) -> bool {
        has_attribute(&self.attributes, CALLBACK_ATTRIBUTE) && !self.is_callback()
    }

    fn to_declaration(&self) -> CallDeclaration {
        CallDeclaration {
            qualified_name: self.name.clone(),
            parameters: self.parameters.iter().map(ParameterEntry::to_spec).collect(),
        }
    }
}

impl TypeEntry {
    fn container_type(&self) -> ContainerType {
        ContainerType::new(&self.name, self.namespace.as_deref())
    }
}

/// `string` and `System.String` are marshalled, everything else is passed
/// through
pub fn semantic_type_of(ty: &str) -> SemanticType {
    match ty {
        "string" | "String" | "System.String" => SemanticType::String,
        _ => SemanticType::Primitive,
    }
}

// `System.Runtime.InteropServices.DllImportAttribute` matches `DllImport`
fn has_attribute(attributes: &[String], wanted: &str) -> bool {
    attributes.iter().any(|attr| {
        let simple = attr.rsplit('.').next().unwrap_or(attr);
        simple.strip_suffix("Attribute").unwrap_or(simple) == wanted
    })
}

/// [`DeclarationSource`] backed by a JSON manifest
pub struct ManifestSource {
    manifest: Manifest,
}

impl ManifestSource {
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(json).context("failed to parse declaration manifest")?;
        Ok(Self::new(manifest))
    }

    /// load the manifest from file path
    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("load manifest: {}", path.display());

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        let manifest: Manifest = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))?;

        log::debug!("manifest load success, {} types", manifest.types.len());
        Ok(Self::new(manifest))
    }

    fn find_type(&self, container: &ContainerType) -> Result<&TypeEntry> {
        match self
            .manifest
            .types
            .iter()
            .filter(|t| has_attribute(&t.attributes, CONTAINER_ATTRIBUTE))
            .find(|t| t.name == container.simple_name && t.namespace == container.namespace)
        {
            Some(entry) => Ok(entry),
            None => bail!("type not found in manifest: {}", container.full_name()),
        }
    }
}

impl DeclarationSource for ManifestSource {
    fn container_types(&self) -> Result<Vec<ContainerType>> {
        let mut containers: Vec<ContainerType> = Vec::new();
        for entry in &self.manifest.types {
            if !has_attribute(&entry.attributes, CONTAINER_ATTRIBUTE) {
                continue;
            }
            let container = entry.container_type();
            if containers.contains(&container) {
                log::warn!(
                    "skip duplicate type {}, only the first declaration is generated",
                    container.full_name()
                );
                continue;
            }
            containers.push(container);
        }

        log::debug!(
            "{} of {} types tagged {}",
            containers.len(),
            self.manifest.types.len(),
            CONTAINER_ATTRIBUTE
        );
        Ok(containers)
    }

    fn native_exposed(&self, container: &ContainerType) -> Result<Vec<CallDeclaration>> {
        let entry = self.find_type(container)?;
        Ok(entry
            .methods
            .iter()
            .filter(|m| {
                if m.native_tag_ignored() {
                    log::warn!(
                        "ignore {} on {}: method must be static and non-public",
                        NATIVE_ATTRIBUTE,
                        m.name
                    );
                }
                m.is_native_exposed()
            })
            .map(MethodEntry::to_declaration)
            .collect())
    }

    fn callbacks(&self, container: &ContainerType) -> Result<Vec<CallDeclaration>> {
        let entry = self.find_type(container)?;
        Ok(entry
            .methods
            .iter()
            .filter(|m| {
                if m.callback_tag_ignored() {
                    log::warn!("ignore {} on {}: method must be public", CALLBACK_ATTRIBUTE, m.name);
                }
                m.is_callback()
            })
            .map(MethodEntry::to_declaration)
            .collect())
    }
}
