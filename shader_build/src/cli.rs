use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use shader_build::config::{DEFAULT_BUILD_DIR, DEFAULT_COMPILER, DEFAULT_SRC_DIR};
use shader_build::{BuildConfig, CompileFailurePolicy};

/// Compiles .vert and .frag shaders into SPIR-V, skipping shaders whose output is up to date.
#[derive(Parser, Debug)]
#[command(version)]
pub struct ShaderBuildArgs {
    /// The directory that is searched for shaders.
    #[arg(long, default_value = DEFAULT_SRC_DIR)]
    pub src_dir: PathBuf,
    /// The directory the compiled shaders are written to.
    ///
    /// The directory structure below the source directory is mirrored here.
    #[arg(long, default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,
    /// The shader compiler executable. It is invoked as `<compiler> <source> -o <output>`.
    #[arg(long, default_value = DEFAULT_COMPILER)]
    pub compiler_path: PathBuf,
    /// Exit with an error if any shader fails to compile.
    ///
    /// By default compile failures are only logged.
    #[arg(long)]
    pub strict: bool,
    /// Only print which shaders would be compiled.
    #[arg(long)]
    pub dry_run: bool,
    /// The log level.
    #[arg(value_enum, long, default_value_t)]
    pub log_level: CliLogLevel,
}

impl ShaderBuildArgs {
    pub fn build_config(&self) -> BuildConfig {
        let failure_policy = if self.strict {
            CompileFailurePolicy::Strict
        } else {
            CompileFailurePolicy::Lenient
        };
        BuildConfig::new(&self.src_dir, &self.build_dir)
            .with_compiler_path(&self.compiler_path)
            .with_failure_policy(failure_policy)
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CliLogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Trace => LevelFilter::Trace,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Error => LevelFilter::Error,
        }
    }
}
