use std::path::PathBuf;

use crate::shader_stage::ShaderStages;

pub const DEFAULT_SRC_DIR: &str = "src";
pub const DEFAULT_BUILD_DIR: &str = "build";
pub const DEFAULT_COMPILER: &str = "glslc";

/// What a failed compiler invocation does to the overall run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CompileFailurePolicy {
    /// Warn and carry on. The run still succeeds.
    #[default]
    Lenient,
    /// Carry on with the remaining shaders, then fail the run with every failure.
    Strict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub src_dir: PathBuf,
    pub build_dir: PathBuf,
    pub compiler_path: PathBuf,
    pub stages: ShaderStages,
    pub failure_policy: CompileFailurePolicy,
}

impl BuildConfig {
    pub fn new(src_dir: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            build_dir: build_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_compiler_path(mut self, compiler_path: impl Into<PathBuf>) -> Self {
        self.compiler_path = compiler_path.into();
        self
    }

    pub fn with_stages(mut self, stages: ShaderStages) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: CompileFailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from(DEFAULT_SRC_DIR),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            compiler_path: PathBuf::from(DEFAULT_COMPILER),
            stages: ShaderStages::default(),
            failure_policy: CompileFailurePolicy::default(),
        }
    }
}
