// Where the uploaded bytes come from: a named file or standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, UploadError};

/// Filename announced to the server when reading standard input.
pub const STDIN_NAME: &str = "stdin.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// Resolve the positional argument. Absent or `-` means standard input.
    pub fn from_arg(arg: Option<&str>) -> Source {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(p) => Source::Path(PathBuf::from(p)),
        }
    }

    /// Filename sent in the multipart `file` part.
    pub fn announced_name(&self) -> String {
        match self {
            Source::Stdin => STDIN_NAME.to_string(),
            Source::Path(p) => match p.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => p.to_string_lossy().into_owned(),
            },
        }
    }

    /// Path used in diagnostics.
    pub fn display_path(&self) -> PathBuf {
        match self {
            Source::Stdin => PathBuf::from("<stdin>"),
            Source::Path(p) => p.clone(),
        }
    }

    /// Read the whole source into memory. A file handle is closed before
    /// this returns.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        match self {
            Source::Stdin => {
                debug!("reading standard input");
                read_to_end(io::stdin().lock(), &self.display_path())
            }
            Source::Path(p) => {
                debug!("reading {}", p.display());
                let file = File::open(p).map_err(|source| UploadError::Open {
                    path: p.clone(),
                    source,
                })?;
                read_to_end(file, p)
            }
        }
    }
}

fn read_to_end(mut r: impl Read, path: &Path) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", buf.len(), path.display());
    Ok(buf)
}
