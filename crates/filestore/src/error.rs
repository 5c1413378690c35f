pub type Result<T> = std::result::Result<T, FilestoreError>;

/// Errors raised by directory and file operations.
///
/// Every backend reports the same four kinds. Each carries the child name
/// that violated the precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilestoreError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File exists: {0}")]
    AlreadyExists(String),

    /// Expected a file, found a directory
    #[error("Is a directory: {0}")]
    IsADirectory(String),

    /// Expected a directory, found a file
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Fieldless view of [`FilestoreError`] for narrow matching and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    IsADirectory,
    NotADirectory,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::AlreadyExists => "already exists",
            ErrorKind::IsADirectory => "is a directory",
            ErrorKind::NotADirectory => "not a directory",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FilestoreError {
    pub fn not_found<S: AsRef<str>>(name: S) -> Self {
        FilestoreError::NotFound(name.as_ref().to_string())
    }

    pub fn already_exists<S: AsRef<str>>(name: S) -> Self {
        FilestoreError::AlreadyExists(name.as_ref().to_string())
    }

    pub fn is_a_directory<S: AsRef<str>>(name: S) -> Self {
        FilestoreError::IsADirectory(name.as_ref().to_string())
    }

    pub fn not_a_directory<S: AsRef<str>>(name: S) -> Self {
        FilestoreError::NotADirectory(name.as_ref().to_string())
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilestoreError::NotFound(_) => ErrorKind::NotFound,
            FilestoreError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            FilestoreError::IsADirectory(_) => ErrorKind::IsADirectory,
            FilestoreError::NotADirectory(_) => ErrorKind::NotADirectory,
        }
    }

    /// The offending name or path
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            FilestoreError::NotFound(name)
            | FilestoreError::AlreadyExists(name)
            | FilestoreError::IsADirectory(name)
            | FilestoreError::NotADirectory(name) => name,
        }
    }
}
