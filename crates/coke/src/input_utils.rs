use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Whether `path` is the `-` placeholder for stdin.
pub(crate) fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
///
/// Inputs larger than `max_bytes` are rejected without being read in
/// full.
pub(crate) fn read_input(path: &Path, max_bytes: u64) -> anyhow::Result<String> {
    let reader: Box<dyn Read> = if is_stdin(path) {
        Box::new(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {path:#?}"))?;
        Box::new(file)
    };

    let mut bytes = vec![];
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {path:#?}"))?;
    if bytes.len() as u64 > max_bytes {
        anyhow::bail!(
            "{path:#?} is larger than the maximum input size of {max_bytes} \
            bytes (see `--max-input-bytes`)"
        );
    }

    String::from_utf8(bytes)
        .with_context(|| format!("{path:#?} is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::read_input;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("coke-input-utils-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    /// Files within the limit are read in full.
    #[test]
    fn reads_file_within_limit() {
        let path = write_temp("ok.graphql", b"{ a }");
        assert_eq!(read_input(&path, 5).unwrap(), "{ a }");
        std::fs::remove_file(path).unwrap();
    }

    /// Files over the limit are rejected.
    #[test]
    fn rejects_file_over_limit() {
        let path = write_temp("big.graphql", b"{ abc }");
        let err = read_input(&path, 6).unwrap_err();
        assert!(err.to_string().contains("maximum input size of 6 bytes"), "{err}");
        std::fs::remove_file(path).unwrap();
    }

    /// Non-UTF-8 input is an error rather than lossy text.
    #[test]
    fn rejects_invalid_utf8() {
        let path = write_temp("bad.graphql", &[b'{', 0xFF, b'}']);
        let err = read_input(&path, 100).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
        std::fs::remove_file(path).unwrap();
    }

    /// Missing files report the path.
    #[test]
    fn missing_file_is_error() {
        let err = read_input(std::path::Path::new("/nonexistent/coke.graphql"), 100)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open"), "{err}");
    }
}
