use anyhow::Result;
use serde::Serialize;

use crate::codegen::GlueCodegen;
use crate::config::GeneratorConfig;
use crate::source::DeclarationSource;
use crate::store::{FileStore, WriteOutcome};
use crate::types::{ContainerType, ContainerUnit, GeneratedArtifact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStep {
    DiscoverContainers,
    BuildUnit,
    Write,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationFailure {
    /// full name of the container, absent when discovery itself failed
    pub container: Option<String>,
    pub step: GenerationStep,
    /// artifact path for write failures
    pub path: Option<String>,
    pub error: String,
}

/// what one pass did
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub containers: usize,
    pub written: Vec<String>,
    pub unchanged: Vec<String>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(
        &mut self,
        container: Option<&ContainerType>,
        step: GenerationStep,
        path: Option<&str>,
        err: &anyhow::Error,
    ) {
        log::error!(
            "{:?} failed for {}: {:#}",
            step,
            container.map(ContainerType::full_name).as_deref().unwrap_or("<all>"),
            err
        );
        self.failures.push(GenerationFailure {
            container: container.map(ContainerType::full_name),
            step,
            path: path.map(str::to_string),
            error: format!("{:#}", err),
        });
    }
}

/// one generation pass: discover containers, build a unit per container,
/// emit both artifacts, write them. a failed step only costs its own
/// container or artifact
pub struct GenerationDriver {
    config: GeneratorConfig,
}

impl GenerationDriver {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// collect the declarations of one container into a fresh unit
    pub fn build_unit(
        &self,
        source: &dyn DeclarationSource,
        container: &ContainerType,
    ) -> Result<ContainerUnit> {
        let mut unit = ContainerUnit::new(container.clone());
        unit.native_exposed = source.native_exposed(container)?;
        unit.callbacks = source.callbacks(container)?;

        if unit.is_empty() {
            log::warn!(
                "{} is tagged but declares no native or callback functions",
                container.full_name()
            );
        }

        log::debug!(
            "{:>12} {}: {} native, {} callbacks",
            "unit",
            container.full_name(),
            unit.native_exposed.len(),
            unit.callbacks.len()
        );
        Ok(unit)
    }

    pub fn emit(&self, unit: &ContainerUnit) -> Vec<GeneratedArtifact> {
        GlueCodegen::generate_all(unit, &self.config)
    }

    /// discover and emit without writing anything. like `run`, a container
    /// whose declarations cannot be read is logged and skipped
    pub fn collect(&self, source: &dyn DeclarationSource) -> Result<Vec<GeneratedArtifact>> {
        let containers = source.container_types()?;
        if containers.is_empty() {
            log::warn!("no containers tagged for generation");
        }

        let mut artifacts = Vec::new();
        for container in &containers {
            match self.build_unit(source, container) {
                Ok(unit) => artifacts.extend(self.emit(&unit)),
                Err(err) => log::error!(
                    "{:?} failed for {}: {:#}",
                    GenerationStep::BuildUnit,
                    container.full_name(),
                    err
                ),
            }
        }
        Ok(artifacts)
    }

    pub fn run(
        &self,
        source: &dyn DeclarationSource,
        store: &mut dyn FileStore,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();

        let containers = match source.container_types() {
            Ok(containers) => containers,
            Err(err) => {
                report.fail(None, GenerationStep::DiscoverContainers, None, &err);
                return report;
            }
        };

        if containers.is_empty() {
            log::warn!("no containers tagged for generation");
        }

        for container in &containers {
            report.containers += 1;

            let unit = match self.build_unit(source, container) {
                Ok(unit) => unit,
                Err(err) => {
                    report.fail(Some(container), GenerationStep::BuildUnit, None, &err);
                    continue;
                }
            };

            for artifact in self.emit(&unit) {
                match store.write(&artifact.relative_path, &artifact.content) {
                    Ok(WriteOutcome::Written) => report.written.push(artifact.relative_path),
                    Ok(WriteOutcome::Unchanged) => report.unchanged.push(artifact.relative_path),
                    Err(err) => report.fail(
                        Some(container),
                        GenerationStep::Write,
                        Some(&artifact.relative_path),
                        &err,
                    ),
                }
            }
        }

        log::info!(
            "processed {} containers, {} written, {} unchanged, {} failed",
            report.containers,
            report.written.len(),
            report.unchanged.len(),
            report.failures.len()
        );
        report
    }
}
