use filestore::FilestoreError;

/// One-line description of a command failure.
///
/// Filestore errors are reported by kind (`not found: /docs/x`) so shell
/// output stays stable; anything else falls back to the anyhow chain.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FilestoreError>() {
        Some(fs_err) => format!("{}: {}", fs_err.kind(), fs_err.name()),
        None => format!("{err:#}"),
    }
}
