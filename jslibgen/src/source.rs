use anyhow::Result;

use crate::types::{CallDeclaration, ContainerType};

/// supplies the tagged containers and their declarations. implementations
/// must return the same order on every call, otherwise generated artifacts
/// stop being reproducible
pub trait DeclarationSource {
    /// every type tagged as a generation target
    fn container_types(&self) -> Result<Vec<ContainerType>>;

    /// native functions the script side may call, in declaration order
    fn native_exposed(&self, container: &ContainerType) -> Result<Vec<CallDeclaration>>;

    /// native receivers the script side relays messages to, in declaration
    /// order
    fn callbacks(&self, container: &ContainerType) -> Result<Vec<CallDeclaration>>;
}
