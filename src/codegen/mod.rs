//! Registry rendering and emission
//!
//! The generated file's textual shape is a compatibility contract with the
//! integration-test harness: it must declare `pub fn tests(cluster:
//! Arc<ClusterUnderTest>) -> Vec<TestFn>`, the `TestFn` struct, and
//! `TestFn::new` exactly as the harness expects them. The boilerplate lives
//! in `templates/test_functions.rs.in` and is embedded at compile time;
//! rendering substitutes the joined registration entries for its single
//! placeholder.

use std::fs;
use std::io;
use std::path::Path;

use crate::discovery::TestCase;

/// The fixed boilerplate surrounding the registration list.
const TEMPLATE: &str = include_str!("../../templates/test_functions.rs.in");

/// Placeholder in [`TEMPLATE`] replaced by the joined entries.
const PLACEHOLDER: &str = "{{test_fns}}";

/// Base name of the generated file, relative to the configured root.
pub const OUTPUT_FILE: &str = "test_functions.rs";

/// Render one registration entry: the qualified name as a display string,
/// and a boxed deferred invocation of the same name bound to the shared
/// cluster handle.
fn render_entry(case: &TestCase) -> String {
    let name = case.qualified_name();
    format!("TestFn::new(\"{name}\", Box::pin({name}(cluster.clone())))")
}

/// Render the full registry source for `cases`.
///
/// Entries appear in input order, joined with `,\n`; an empty slice yields
/// the template with an empty list body, which is still a complete,
/// compilable file.
pub fn render_registry(cases: &[TestCase]) -> String {
    let entries = cases.iter().map(render_entry).collect::<Vec<_>>().join(",\n");
    TEMPLATE.replace(PLACEHOLDER, &entries)
}

/// Overwrite `path` with the rendered registry text.
///
/// Truncating write, no rollback. Callers render first and write last, so
/// a failure before this point leaves any previous output untouched.
pub fn write_registry(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_pairs_display_name_with_invocation() {
        let rendered = render_entry(&TestCase::new("math", "test_addition"));
        assert_eq!(
            rendered,
            "TestFn::new(\"math::test_addition\", Box::pin(math::test_addition(cluster.clone())))"
        );
    }

    #[test]
    fn entries_preserve_input_order() {
        let cases = [
            TestCase::new("b", "test_second"),
            TestCase::new("a", "test_first"),
        ];
        let rendered = render_registry(&cases);
        let b = rendered.find("b::test_second").unwrap();
        let a = rendered.find("a::test_first").unwrap();
        assert!(b < a, "input order must survive rendering");
    }

    #[test]
    fn duplicate_cases_render_twice() {
        let cases = [
            TestCase::new("m", "test_x"),
            TestCase::new("m", "test_x"),
        ];
        let rendered = render_registry(&cases);
        assert_eq!(rendered.matches("TestFn::new(\"m::test_x\"").count(), 2);
    }

    #[test]
    fn empty_input_yields_complete_template() {
        let rendered = render_registry(&[]);
        assert!(!rendered.contains(PLACEHOLDER));
        assert!(rendered.contains("pub fn tests(cluster: Arc<ClusterUnderTest>) -> Vec<TestFn>"));
        assert!(rendered.contains("pub struct TestFn"));
        assert!(!rendered.contains("TestFn::new(\""));
    }
}
