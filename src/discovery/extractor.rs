//! Line-prefix extraction of qualified test names
//!
//! Not a parser. A line declares a test iff its trimmed form starts with
//! [`TEST_PREFIX`]; the function name runs from the `test_` token to the
//! first `(`. A qualifying line with no `(` is rejected with a diagnostic
//! naming the file and line rather than sliced blindly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{DiscoveryError, TestCase};

/// The literal prefix a trimmed line must start with to declare a test.
pub const TEST_PREFIX: &str = "pub async fn test_";

/// Where the `test_` token starts within [`TEST_PREFIX`].
const NAME_START: usize = TEST_PREFIX.len() - "test_".len();

/// Strip exactly one trailing `.rs` from a file's base name.
///
/// Plain suffix strip, not extension parsing: a name without the suffix
/// is used unchanged, `a.rs.rs` becomes `a.rs`.
pub fn module_name(file_name: &str) -> &str {
    file_name.strip_suffix(".rs").unwrap_or(file_name)
}

/// Open `path` and extract every test it declares.
pub fn extract_file(path: &Path) -> Result<Vec<TestCase>, DiscoveryError> {
    let file = File::open(path).map_err(|source| DiscoveryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    extract(path, module_name(base), BufReader::new(file))
}

/// Scan `reader` line by line, collecting a [`TestCase`] per qualifying
/// declaration. `path` is used for diagnostics only.
pub fn extract<R: BufRead>(
    path: &Path,
    module: &str,
    reader: R,
) -> Result<Vec<TestCase>, DiscoveryError> {
    let mut cases = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DiscoveryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let trimmed = line.trim();
        if !trimmed.starts_with(TEST_PREFIX) {
            continue;
        }

        let part = &trimmed[NAME_START..];
        let paren = part.find('(').ok_or_else(|| DiscoveryError::MissingParen {
            path: path.to_path_buf(),
            line: idx + 1,
            text: trimmed.to_string(),
        })?;

        cases.push(TestCase::new(module, &part[..paren]));
    }

    Ok(cases)
}
