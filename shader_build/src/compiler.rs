use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::CompileError;

pub trait ShaderCompiler {
    /// Compiles `source` into the binary artifact at `output`.
    fn compile(&self, source: &Path, output: &Path) -> Result<(), CompileError>;
}

impl<T: ShaderCompiler + ?Sized> ShaderCompiler for &T {
    fn compile(&self, source: &Path, output: &Path) -> Result<(), CompileError> {
        (**self).compile(source, output)
    }
}

/// Runs a glslc compatible executable as `<executable> <source> -o <output>`.
#[derive(Clone, Debug)]
pub struct GlslcCompiler {
    executable: PathBuf,
}

impl GlslcCompiler {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn command(&self, source: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.executable);
        command.arg(source).arg("-o").arg(output);
        command
    }
}

impl Default for GlslcCompiler {
    fn default() -> Self {
        Self::new("glslc")
    }
}

impl ShaderCompiler for GlslcCompiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<(), CompileError> {
        log::trace!("Running {:?}", self.command(source, output));
        let result = self
            .command(source, output)
            .output()
            .map_err(|e| CompileError::Spawn {
                executable: self.executable.clone(),
                source: e,
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        if !result.status.success() {
            return Err(CompileError::Failed {
                status: result.status,
                stderr,
            });
        }
        if let Some(diagnostics) = success_diagnostics(&stderr) {
            log::warn!("{}: {}", source.display(), diagnostics);
        }
        Ok(())
    }
}

/// Warnings a successful compiler run printed, if any.
fn success_diagnostics(stderr: &str) -> Option<&str> {
    Some(stderr).filter(|stderr| !stderr.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_paths_as_separate_arguments() {
        let compiler = GlslcCompiler::new("/opt/vulkan/bin/glslc");
        let command = compiler.command(Path::new("src/my shader;rm.vert"), Path::new("build/my shader;rm.vert.spv"));
        assert_eq!(command.get_program(), "/opt/vulkan/bin/glslc");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["src/my shader;rm.vert", "-o", "build/my shader;rm.vert.spv"]);
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let compiler = GlslcCompiler::new("/nonexistent/shader-build-test/glslc");
        let err = compiler
            .compile(Path::new("tri.vert"), Path::new("tri.vert.spv"))
            .unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }), "{:?}", err);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        let compiler = GlslcCompiler::new("false");
        let err = compiler
            .compile(Path::new("tri.vert"), Path::new("tri.vert.spv"))
            .unwrap_err();
        match err {
            CompileError::Failed { status, .. } => assert!(!status.success()),
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn warnings_of_successful_runs_are_kept() {
        assert_eq!(
            success_diagnostics("tri.frag:3: warning: unused variable"),
            Some("tri.frag:3: warning: unused variable")
        );
        assert_eq!(success_diagnostics(""), None);
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let compiler = GlslcCompiler::new("true");
        compiler
            .compile(Path::new("tri.vert"), Path::new("tri.vert.spv"))
            .unwrap();
    }
}
