/// dispatch code-gen either to the jslib or the jspre emitter
use crate::config::GeneratorConfig;
use crate::types::{ContainerUnit, GeneratedArtifact};

use super::kind::ArtifactKind;
use super::{jslib, jspre};

pub struct GlueCodegen;

impl GlueCodegen {
    /// render one artifact body. pure: the same unit and flag always give the
    /// same text
    pub fn generate_content(unit: &ContainerUnit, kind: ArtifactKind, debug_prints: bool) -> String {
        match kind {
            ArtifactKind::NativeStub => jslib::generate(unit, debug_prints),
            ArtifactKind::ScriptSide => jspre::generate(unit),
        }
    }

    pub fn generate(
        unit: &ContainerUnit,
        kind: ArtifactKind,
        config: &GeneratorConfig,
    ) -> GeneratedArtifact {
        let relative_path = format!(
            "{}/{}.{}",
            unit.container.output_dir(&config.output_root),
            unit.simple_name(),
            kind.extension()
        );
        log::debug!("generate {} for {}", relative_path, unit.container.full_name());

        GeneratedArtifact {
            relative_path,
            content: Self::generate_content(unit, kind, config.debug_prints),
        }
    }

    /// both artifacts of a unit, native stub first
    pub fn generate_all(unit: &ContainerUnit, config: &GeneratorConfig) -> Vec<GeneratedArtifact> {
        ArtifactKind::ALL
            .iter()
            .map(|kind| Self::generate(unit, *kind, config))
            .collect()
    }
}
