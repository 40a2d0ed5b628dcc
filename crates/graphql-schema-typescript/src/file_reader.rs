use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, FileSystemError>;

pub(crate) fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(FileSystemError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| FileSystemError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| FileSystemError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(content)
}

/// Writes `content` to `file_path` as UTF-8, replacing whatever was there.
///
/// Missing parent directories are not created.
pub(crate) fn write_content<P: AsRef<Path>>(
    file_path: P,
    content: &str,
) -> Result<()> {
    let file_path = file_path.as_ref();
    std::fs::write(file_path, content.as_bytes())
        .map_err(|err| FileSystemError::OutputWriteError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("Failed to walk schema directory `{}`: {err}", dir_path.display())]
    DirectoryWalkError {
        dir_path: PathBuf,
        err: walkdir::Error,
    },

    #[error("Schema file `{}` is not valid UTF-8: {err}", file_path.display())]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read schema file `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to write generated output to `{}`: {err}", file_path.display())]
    OutputWriteError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Schema path `{}` is not a file", .0.display())]
    PathIsNotAFile(PathBuf),

    #[error("Schema path `{}` does not exist", .0.display())]
    PathNotFound(PathBuf),
}
impl std::cmp::PartialEq for FileSystemError {
    fn eq(&self, other: &Self) -> bool {
        use FileSystemError::*;
        match (self, other) {
            (DirectoryWalkError {
                dir_path: self_dir_path,
                ..
            }, DirectoryWalkError {
                dir_path: other_dir_path,
                ..
            }) => self_dir_path == other_dir_path,

            (FileDecodeError {
                file_path: self_file_path,
                err: self_err,
            }, FileDecodeError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path.eq(other_file_path)
                && self_err.eq(other_err)
            },

            (FileReadError {
                file_path: self_file_path,
                err: self_err,
            }, FileReadError {
                file_path: other_file_path,
                err: other_err,
            }) | (OutputWriteError {
                file_path: self_file_path,
                err: self_err,
            }, OutputWriteError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err.kind() == other_err.kind()
            },

            (PathIsNotAFile(self_path), PathIsNotAFile(other_path))
            | (PathNotFound(self_path), PathNotFound(other_path)) => {
                self_path.eq(other_path)
            },

            _ => false,
        }
    }
}
