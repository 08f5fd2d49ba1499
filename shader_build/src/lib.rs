pub mod compiler;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod shader_stage;
pub mod staleness;

pub use compiler::{GlslcCompiler, ShaderCompiler};
pub use config::{BuildConfig, CompileFailurePolicy};
pub use driver::{BuildDriver, BuildSummary, PlannedShader};
pub use error::{BuildError, CompileError, FileFailure};
pub use shader_stage::{ShaderStage, ShaderStages};
pub use staleness::{decide, BuildDecision, OutputTarget, SourceFile, OUTPUT_SUFFIX};
