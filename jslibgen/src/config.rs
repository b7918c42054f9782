/// directory under the asset root that receives generated glue
pub const DEFAULT_OUTPUT_ROOT: &str = "Generated/JsLib";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// artifacts land in `<output_root>/<namespace path>/`
    pub output_root: String,
    /// inject `console.log` calls into `.jslib` entries
    pub debug_prints: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: DEFAULT_OUTPUT_ROOT.to_string(),
            debug_prints: cfg!(debug_assertions),
        }
    }
}
