use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::compiler::{GlslcCompiler, ShaderCompiler};
use crate::config::{BuildConfig, CompileFailurePolicy};
use crate::error::{BuildError, FileFailure};
use crate::staleness::{BuildDecision, OutputTarget, SourceFile};

/// A shader together with the artifact it compiles to and whether it is out of date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedShader {
    pub source: SourceFile,
    pub target: OutputTarget,
    pub decision: BuildDecision,
}

#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Relative paths of the shaders that were compiled successfully.
    pub compiled: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Only populated under [`CompileFailurePolicy::Lenient`], strict runs return the failures as an error.
    pub failed: Vec<FileFailure>,
}

pub struct BuildDriver<C: ShaderCompiler> {
    config: BuildConfig,
    compiler: C,
}

impl BuildDriver<GlslcCompiler> {
    /// Uses the compiler executable named by the configuration.
    pub fn from_config(config: BuildConfig) -> Self {
        let compiler = GlslcCompiler::new(config.compiler_path.clone());
        Self::new(config, compiler)
    }
}

impl<C: ShaderCompiler> BuildDriver<C> {
    pub fn new(config: BuildConfig, compiler: C) -> Self {
        Self { config, compiler }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    fn src_root(&self) -> Result<PathBuf, BuildError> {
        let src_dir = &self.config.src_dir;
        let not_found = |source: Option<io::Error>| BuildError::DirectoryNotFound {
            path: src_dir.clone(),
            source,
        };
        let root = std::path::absolute(src_dir).map_err(|e| not_found(Some(e)))?;
        let metadata = fs::metadata(&root).map_err(|e| not_found(Some(e)))?;
        if !metadata.is_dir() {
            return Err(not_found(None));
        }
        fs::read_dir(&root).map_err(|e| not_found(Some(e)))?;
        Ok(root)
    }

    fn build_root(&self) -> Result<PathBuf, BuildError> {
        std::path::absolute(&self.config.build_dir).map_err(|e| BuildError::ResolvePath {
            path: self.config.build_dir.clone(),
            source: e,
        })
    }

    /// Lists every recognized shader below the source root, sorted by path.
    pub fn scan(&self) -> Result<Vec<SourceFile>, BuildError> {
        let root = self.src_root()?;
        self.scan_root(&root)
    }

    fn scan_root(&self, root: &Path) -> Result<Vec<SourceFile>, BuildError> {
        let mut sources = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() || !entry.path().is_file() {
                continue;
            }
            let Some(stage) = self.config.stages.match_path(entry.path()) else {
                continue;
            };
            let relative_path = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            sources.push(SourceFile::read(entry.into_path(), relative_path, stage)?);
        }
        log::debug!("Found {} shader(s) in {}", sources.len(), root.display());
        Ok(sources)
    }

    /// Decides for every shader whether it needs compiling, without touching the build directory.
    pub fn plan(&self) -> Result<Vec<PlannedShader>, BuildError> {
        let sources = self.scan()?;
        let build_root = self.build_root()?;
        sources
            .into_iter()
            .map(|source| -> Result<PlannedShader, BuildError> {
                let target = OutputTarget::for_source(&build_root, &source.relative_path);
                let decision = target.decide(&source)?;
                Ok(PlannedShader {
                    source,
                    target,
                    decision,
                })
            })
            .collect()
    }

    pub fn run(&self) -> Result<BuildSummary, BuildError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.run_with_output(&mut lock)
    }

    /// Runs the build, writing the progress lines to `out`.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<BuildSummary, BuildError> {
        let src_root = self.src_root()?;
        let build_root = self.build_root()?;

        writeln!(
            out,
            "Compiling shaders from {} to {}",
            src_root.display(),
            build_root.display()
        )
        .map_err(BuildError::Progress)?;

        fs::create_dir_all(&build_root)
            .map_err(|e| BuildError::create_directory(build_root.clone(), e))?;

        let mut summary = BuildSummary::default();
        for source in self.scan_root(&src_root)? {
            let target = OutputTarget::for_source(&build_root, &source.relative_path);
            let directory = target.directory();
            fs::create_dir_all(directory)
                .map_err(|e| BuildError::create_directory(directory.to_path_buf(), e))?;

            let decision = target.decide(&source)?;
            log::trace!("{} -> {}", source.relative_path.display(), decision.as_str());
            if decision == BuildDecision::Skip {
                log::debug!("{} is up to date", source.relative_path.display());
                summary.skipped.push(source.relative_path);
                continue;
            }

            match self.compiler.compile(&source.path, &target.path) {
                Ok(()) => {
                    writeln!(out, "Compiled {}", source.relative_path.display())
                        .map_err(BuildError::Progress)?;
                    summary.compiled.push(source.relative_path);
                }
                Err(e) => {
                    log::warn!("Failed to compile {}: {}", source.relative_path.display(), e);
                    summary.failed.push(FileFailure {
                        relative_path: source.relative_path,
                        error: e,
                    });
                }
            }
        }

        if self.config.failure_policy == CompileFailurePolicy::Strict && !summary.failed.is_empty() {
            return Err(BuildError::CompileFailures(summary.failed));
        }
        Ok(summary)
    }
}
