use serde::Serialize;

/// how a parameter crosses the native/script boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// pointer to a native UTF-8 string, marshalled with `UTF8ToString`
    String,
    /// passed through unchanged
    Primitive,
}

/// declared parameters have a name and a semantic type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub name: String,
    pub semantic_type: SemanticType,
}

impl ParameterSpec {
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            semantic_type: SemanticType::String,
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            semantic_type: SemanticType::Primitive,
        }
    }

    /// the expression that hands this parameter to script code
    pub fn marshalled(&self) -> String {
        match self.semantic_type {
            SemanticType::String => format!("UTF8ToString({})", self.name),
            SemanticType::Primitive => self.name.clone(),
        }
    }
}

/// one native-exposed function or one callback; which of the two it is
/// depends only on the list that holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallDeclaration {
    pub qualified_name: String,
    pub parameters: Vec<ParameterSpec>,
}

impl CallDeclaration {
    pub fn new(qualified_name: impl Into<String>, parameters: Vec<ParameterSpec>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            parameters,
        }
    }

    /// parameter names in declaration order, comma separated
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// parameters as script-side expressions, comma separated
    pub fn argument_list(&self) -> String {
        self.parameters
            .iter()
            .map(ParameterSpec::marshalled)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// identity of a type tagged for generation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContainerType {
    pub simple_name: String,
    pub namespace: Option<String>,
}

impl ContainerType {
    pub fn new(simple_name: impl Into<String>, namespace: Option<&str>) -> Self {
        Self {
            simple_name: simple_name.into(),
            namespace: namespace.map(str::to_string),
        }
    }

    /// `Bar.Baz` -> `Bar.Baz.Foo`, or just `Foo` without a namespace
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.simple_name),
            None => self.simple_name.clone(),
        }
    }

    /// directory the artifacts of this container are written to, relative to
    /// the asset root
    pub fn output_dir(&self, output_root: &str) -> String {
        let root = output_root.replace('\\', "/");
        let root = root.trim_end_matches('/');
        match &self.namespace {
            Some(ns) if !ns.is_empty() => {
                format!("{}/{}", root, ns.replace(['.', '\\'], "/"))
            }
            _ => root.to_string(),
        }
    }
}

/// everything generated for one container in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerUnit {
    pub container: ContainerType,
    pub native_exposed: Vec<CallDeclaration>,
    pub callbacks: Vec<CallDeclaration>,
}

impl ContainerUnit {
    pub fn new(container: ContainerType) -> Self {
        Self {
            container,
            native_exposed: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.container.simple_name
    }

    pub fn is_empty(&self) -> bool {
        self.native_exposed.is_empty() && self.callbacks.is_empty()
    }
}

/// a generated text file, path relative to the asset root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub relative_path: String,
    pub content: String,
}
