use std::io::Error as IOError;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Could not start the shader compiler {}", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: IOError,
    },
    #[error("The shader compiler exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// A compile error together with the shader it belongs to.
#[derive(Debug, Error)]
#[error("Failed to compile {}", relative_path.display())]
pub struct FileFailure {
    pub relative_path: PathBuf,
    #[source]
    pub error: CompileError,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Shader source directory {} does not exist or cannot be read", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: Option<IOError>,
    },
    #[error("Permission denied while creating output directory {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: IOError,
    },
    #[error("Could not create output directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: IOError,
    },
    #[error("Could not resolve {} to an absolute path", path.display())]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: IOError,
    },
    #[error("Could not read the metadata of {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IOError,
    },
    #[error("Could not write the build progress")]
    Progress(#[source] IOError),
    #[error("Could not walk the shader source directory")]
    Walk(#[from] walkdir::Error),
    #[error("{} shader(s) failed to compile", .0.len())]
    CompileFailures(Vec<FileFailure>),
}

impl BuildError {
    pub(crate) fn create_directory(path: PathBuf, source: IOError) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            BuildError::PermissionDenied { path, source }
        } else {
            BuildError::CreateDirectory { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn permission_denied_is_its_own_error() {
        let err = BuildError::create_directory(PathBuf::from("build/a"), IOError::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, BuildError::PermissionDenied { .. }), "{:?}", err);

        let err = BuildError::create_directory(PathBuf::from("build/a"), IOError::from(ErrorKind::AlreadyExists));
        assert!(matches!(err, BuildError::CreateDirectory { .. }), "{:?}", err);
    }

    #[test]
    fn messages_name_the_path() {
        let err = BuildError::DirectoryNotFound {
            path: PathBuf::from("/home/user/project/src"),
            source: None,
        };
        assert!(err.to_string().contains("/home/user/project/src"));
    }
}
