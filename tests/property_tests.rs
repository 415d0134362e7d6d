//! Property-based tests for the extractor
//!
//! The extraction heuristic is a fixed-prefix scan, so its behavior should
//! hold for any identifier-shaped suffix and any parameter-list text, not
//! just the handful of names used in the hand-written tests.

use std::path::Path;

use proptest::prelude::*;

use testgen::codegen::render_registry;
use testgen::discovery::extractor::{extract, module_name};

proptest! {
    /// Any declaration built from the qualifying prefix extracts the name
    /// between `test_` and the first `(`.
    #[test]
    fn qualifying_line_extracts_suffix(
        suffix in "[a-z][a-z0-9_]{0,24}",
        params in "[a-z_:<>, ]{0,40}",
    ) {
        let line = format!("pub async fn test_{suffix}({params}) -> bool {{\n");
        let cases = extract(Path::new("gen.rs"), "gen", line.as_bytes()).unwrap();
        prop_assert_eq!(cases.len(), 1);
        prop_assert_eq!(cases[0].function.as_str(), format!("test_{suffix}"));
        prop_assert_eq!(cases[0].qualified_name(), format!("gen::test_{suffix}"));
    }

    /// Leading and trailing whitespace never changes the outcome.
    #[test]
    fn surrounding_whitespace_is_irrelevant(
        suffix in "[a-z][a-z0-9_]{0,24}",
        pad in "[ \t]{0,8}",
    ) {
        let bare = format!("pub async fn test_{suffix}() {{\n");
        let padded = format!("{pad}pub async fn test_{suffix}() {{{pad}\n");
        let a = extract(Path::new("gen.rs"), "gen", bare.as_bytes()).unwrap();
        let b = extract(Path::new("gen.rs"), "gen", padded.as_bytes()).unwrap();
        prop_assert_eq!(a, b);
    }

    /// `module_name` strips at most one `.rs` suffix.
    #[test]
    fn module_name_strips_at_most_one_suffix(stem in "[a-z][a-z0-9_]{0,16}") {
        let one = format!("{stem}.rs");
        let two = format!("{stem}.rs.rs");
        prop_assert_eq!(module_name(&one), stem.as_str());
        prop_assert_eq!(module_name(&two), format!("{stem}.rs"));
        prop_assert_eq!(module_name(&stem), stem.as_str());
    }

    /// Rendering never drops, reorders, or de-duplicates entries.
    #[test]
    fn rendering_registers_every_case(
        suffixes in prop::collection::vec("[a-z][a-z0-9_]{0,12}", 0..8),
    ) {
        let cases: Vec<_> = suffixes
            .iter()
            .map(|s| testgen::discovery::TestCase::new("gen", format!("test_{s}")))
            .collect();
        let rendered = render_registry(&cases);
        prop_assert_eq!(rendered.matches("TestFn::new(\"").count(), cases.len());
    }
}
