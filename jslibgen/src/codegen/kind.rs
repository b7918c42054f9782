#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// functions merged into `LibraryManager.library`, callable from native code
    NativeStub,
    /// host-side class with stubs and message relays, prepended to the module
    ScriptSide,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::NativeStub, ArtifactKind::ScriptSide];

    pub fn from_extension(s: &str) -> Option<Self> {
        match s {
            "jslib" => Some(Self::NativeStub),
            "jspre" => Some(Self::ScriptSide),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::NativeStub => "jslib",
            Self::ScriptSide => "jspre",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
