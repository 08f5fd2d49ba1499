use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::BuildError;
use crate::shader_stage::ShaderStage;

/// Suffix appended to the full source file name to form the compiled artifact name.
pub const OUTPUT_SUFFIX: &str = ".spv";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildDecision {
    Compile,
    Skip,
}

impl BuildDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildDecision::Compile => "Compile",
            BuildDecision::Skip => "Skip",
        }
    }
}

/// Compile unless the output exists and is at least as new as the source.
pub fn decide(source_modified: SystemTime, output_modified: Option<SystemTime>) -> BuildDecision {
    match output_modified {
        Some(output_modified) if output_modified >= source_modified => BuildDecision::Skip,
        _ => BuildDecision::Compile,
    }
}

/// Snapshot of a shader source file taken during a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub stage: ShaderStage,
    pub modified: SystemTime,
}

impl SourceFile {
    pub fn read(path: PathBuf, relative_path: PathBuf, stage: ShaderStage) -> Result<Self, BuildError> {
        let modified = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .map_err(|e| BuildError::Io {
                path: path.clone(),
                source: e,
            })?;
        Ok(Self {
            path,
            relative_path,
            stage,
            modified,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
}

impl OutputTarget {
    /// Mirrors `relative_path` under `build_root` and appends [`OUTPUT_SUFFIX`].
    pub fn for_source(build_root: &Path, relative_path: &Path) -> Self {
        let mut path = build_root.join(relative_path);
        let mut file_name = path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(OsString::new);
        file_name.push(OUTPUT_SUFFIX);
        path.set_file_name(file_name);
        Self { path }
    }

    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// `None` if the output does not exist yet.
    pub fn modified(&self) -> Result<Option<SystemTime>, BuildError> {
        match fs::metadata(&self.path) {
            Ok(metadata) => metadata
                .modified()
                .map(Some)
                .map_err(|e| BuildError::Io {
                    path: self.path.clone(),
                    source: e,
                }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BuildError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    pub fn decide(&self, source: &SourceFile) -> Result<BuildDecision, BuildError> {
        Ok(decide(source.modified, self.modified()?))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn missing_output_compiles() {
        assert_eq!(decide(at(10), None), BuildDecision::Compile);
        assert_eq!(decide(SystemTime::UNIX_EPOCH, None), BuildDecision::Compile);
    }

    #[test]
    fn newer_or_equal_output_skips() {
        assert_eq!(decide(at(10), Some(at(10))), BuildDecision::Skip);
        assert_eq!(decide(at(10), Some(at(11))), BuildDecision::Skip);
    }

    #[test]
    fn older_output_compiles() {
        assert_eq!(decide(at(10), Some(at(9))), BuildDecision::Compile);
        assert_eq!(
            decide(at(10), Some(at(10) - Duration::from_nanos(1))),
            BuildDecision::Compile
        );
    }

    #[test]
    fn output_mirrors_relative_path() {
        let target = OutputTarget::for_source(Path::new("/build"), Path::new("a/b/c.vert"));
        assert_eq!(target.path, PathBuf::from("/build/a/b/c.vert.spv"));
        assert_eq!(target.directory(), Path::new("/build/a/b"));
    }

    #[test]
    fn output_at_build_root() {
        let target = OutputTarget::for_source(Path::new("build"), Path::new("tri.frag"));
        assert_eq!(target.path, PathBuf::from("build/tri.frag.spv"));
        assert_eq!(target.directory(), Path::new("build"));
    }

    #[test]
    fn output_keeps_extra_dots() {
        let target = OutputTarget::for_source(Path::new("/out"), Path::new("post/bloom.down.frag"));
        assert_eq!(target.path, PathBuf::from("/out/post/bloom.down.frag.spv"));
    }
}
