//! Resolver tests using test-case
//!
//! Forward and reverse resolution over centralized and sibling layouts, under
//! both path styles.

use testmapper::core::models::MappingRule;
use testmapper::core::path::PathStyle;
use testmapper::core::services::PathResolver;
use test_case::test_case;

use crate::common::CountingOps;

const POSIX_ROOT: &str = "/workspace";
const WINDOWS_ROOT: &str = "c:\\workspace";

fn resolver(style: PathStyle, rules: Vec<MappingRule>) -> PathResolver {
    let root = match style {
        PathStyle::Posix => POSIX_ROOT,
        PathStyle::Windows => WINDOWS_ROOT,
    };
    PathResolver::new(style, root, rules)
}

fn centralized_rules() -> Vec<MappingRule> {
    vec![
        MappingRule::centralized("src", "tests", ".test"),
        MappingRule::centralized("src", "tests", ".spec"),
    ]
}

fn sibling_rules() -> Vec<MappingRule> {
    vec![MappingRule::sibling("src", "__tests__", ".spec")]
}

fn owned(paths: &[&str]) -> Option<Vec<String>> {
    Some(paths.iter().map(ToString::to_string).collect())
}

// =============================================================================
// Centralized Forward
// =============================================================================

#[test_case(PathStyle::Posix, "/workspace/src/utils/helper.js",
    &["/workspace/tests/utils/helper.test.js", "/workspace/tests/utils/helper.spec.js"] ; "posix")]
#[test_case(PathStyle::Windows, "C:\\workspace\\src\\utils\\helper.js",
    &["c:\\workspace\\tests\\utils\\helper.test.js", "c:\\workspace\\tests\\utils\\helper.spec.js"] ; "windows upper drive")]
#[test_case(PathStyle::Windows, "c:\\workspace\\src\\utils\\helper.js",
    &["c:\\workspace\\tests\\utils\\helper.test.js", "c:\\workspace\\tests\\utils\\helper.spec.js"] ; "windows lower drive")]
fn test_centralized_candidates(style: PathStyle, source: &str, expected: &[&str]) {
    let mut resolver = resolver(style, centralized_rules());
    assert_eq!(resolver.test_candidates(source), owned(expected));
}

#[test_case(PathStyle::Posix, "/workspace/other/helper.js" ; "posix outside source root")]
#[test_case(PathStyle::Posix, "/workspace/src/utils/helper.test.js" ; "posix test suffix")]
#[test_case(PathStyle::Posix, "/workspace/tests/utils/helper.js" ; "posix inside test root")]
#[test_case(PathStyle::Posix, "/workspace/tests/utils/helper.test.js" ; "posix test file")]
#[test_case(PathStyle::Windows, "c:\\workspace\\other\\helper.js" ; "windows outside source root")]
#[test_case(PathStyle::Windows, "c:\\workspace\\src\\utils\\helper.test.js" ; "windows test suffix")]
#[test_case(PathStyle::Windows, "c:\\workspace\\tests\\utils\\helper.js" ; "windows inside test root")]
#[test_case(PathStyle::Windows, "c:\\workspace\\tests\\utils\\helper.test.js" ; "windows test file")]
fn test_centralized_no_candidates(style: PathStyle, path: &str) {
    let mut resolver = resolver(style, centralized_rules());
    assert_eq!(resolver.test_candidates(path), None);
}

// =============================================================================
// Sibling Forward
// =============================================================================

#[test_case(PathStyle::Posix, "/workspace/src/utils/helper.js",
    "/workspace/src/utils/__tests__/helper.spec.js" ; "posix")]
#[test_case(PathStyle::Posix, "/workspace/src/utils/helper.whatever.js",
    "/workspace/src/utils/__tests__/helper.whatever.spec.js" ; "posix dotted stem")]
#[test_case(PathStyle::Windows, "C:\\workspace\\src\\utils\\helper.js",
    "C:\\workspace\\src\\utils\\__tests__\\helper.spec.js" ; "windows keeps drive case")]
fn test_sibling_candidates(style: PathStyle, source: &str, expected: &str) {
    let mut resolver = resolver(style, sibling_rules());
    assert_eq!(resolver.test_candidates(source), owned(&[expected]));
}

#[test_case(PathStyle::Posix, "/workspace/other/helper.js" ; "posix outside source root")]
#[test_case(PathStyle::Posix, "/workspace/src/utils/helper.spec.js" ; "posix test suffix")]
#[test_case(PathStyle::Posix, "/workspace/src/utils/__tests__/helper.js" ; "posix inside test dir")]
#[test_case(PathStyle::Windows, "c:\\workspace\\other\\helper.js" ; "windows outside source root")]
#[test_case(PathStyle::Windows, "c:\\workspace\\src\\utils\\helper.spec.js" ; "windows test suffix")]
#[test_case(PathStyle::Windows, "c:\\workspace\\src\\utils\\__tests__\\helper.js" ; "windows inside test dir")]
fn test_sibling_no_candidates(style: PathStyle, path: &str) {
    let mut resolver = resolver(style, sibling_rules());
    assert_eq!(resolver.test_candidates(path), None);
}

#[test]
fn test_only_rules_containing_the_source_contribute() {
    let mut resolver = resolver(
        PathStyle::Posix,
        vec![
            MappingRule::sibling("src", "__tests__", ".spec"),
            MappingRule::sibling("integration", "__tests__", ".integ.spec"),
        ],
    );
    assert_eq!(
        resolver.test_candidates("/workspace/integration/requestHelp.js"),
        owned(&["/workspace/integration/__tests__/requestHelp.integ.spec.js"])
    );
}

#[test]
fn test_candidates_follow_rule_order() {
    let mut resolver = resolver(
        PathStyle::Posix,
        vec![
            MappingRule::sibling("src", "__tests__", ".test"),
            MappingRule::sibling("src", "__tests__", ".e2e.test"),
        ],
    );
    assert_eq!(
        resolver.test_candidates("/workspace/src/utils/helper.ts"),
        owned(&[
            "/workspace/src/utils/__tests__/helper.test.ts",
            "/workspace/src/utils/__tests__/helper.e2e.test.ts",
        ])
    );
}

#[test]
fn test_no_rules_no_candidates() {
    let mut resolver = resolver(PathStyle::Posix, Vec::new());
    assert_eq!(resolver.test_candidates("/workspace/src/a.js"), None);
    assert_eq!(resolver.source_file("/workspace/tests/a.test.js"), None);
}

// =============================================================================
// Reverse
// =============================================================================

#[test_case(PathStyle::Posix, "/workspace/tests/utils/helper.test.js",
    "/workspace/src/utils/helper.js" ; "posix")]
#[test_case(PathStyle::Posix, "/workspace/tests/utils/helper.whatever.test.ts",
    "/workspace/src/utils/helper.whatever.ts" ; "posix dotted stem")]
#[test_case(PathStyle::Windows, "C:\\workspace\\tests\\utils\\helper.test.js",
    "c:\\workspace\\src\\utils\\helper.js" ; "windows")]
#[test_case(PathStyle::Windows, "C:\\Workspace\\Tests\\utils\\helper.TEST.js",
    "c:\\workspace\\src\\utils\\helper.js" ; "windows ignores case")]
fn test_centralized_source(style: PathStyle, test: &str, expected: &str) {
    let mut resolver = resolver(style, centralized_rules());
    assert_eq!(resolver.source_file(test).as_deref(), Some(expected));
}

#[test_case(PathStyle::Posix, "/workspace/src/utils/__tests__/helper.spec.ts",
    "/workspace/src/utils/helper.ts" ; "posix")]
#[test_case(PathStyle::Windows, "C:\\workspace\\src\\utils\\__tests__\\helper.spec.ts",
    "C:\\workspace\\src\\utils\\helper.ts" ; "windows")]
#[test_case(PathStyle::Posix, "/workspace/src/utils/__tests__/deep/helper.spec.ts",
    "/workspace/src/utils/helper.ts" ; "posix nested below test root")]
#[test_case(PathStyle::Windows, "C:\\workspace\\src\\utils\\__tests__\\deep\\helper.spec.ts",
    "C:\\workspace\\src\\utils\\helper.ts" ; "windows nested below test root")]
fn test_sibling_source(style: PathStyle, test: &str, expected: &str) {
    let mut resolver = resolver(style, sibling_rules());
    assert_eq!(resolver.source_file(test).as_deref(), Some(expected));
}

#[test_case("/workspace/src/utils/helper.js" ; "source file")]
#[test_case("/workspace/tests/utils/helper.js" ; "location without suffix")]
#[test_case("/workspace/src/utils/helper.test.js" ; "suffix without location")]
#[test_case("/workspace/other/helper.test.js" ; "outside every root")]
fn test_no_source(path: &str) {
    let mut resolver = resolver(PathStyle::Posix, centralized_rules());
    assert_eq!(resolver.source_file(path), None);
}

#[test_case(PathStyle::Posix, "/workspace/tests/st.js" ; "posix stem shorter than suffix")]
#[test_case(PathStyle::Posix, "/workspace/tests/.test.js" ; "posix stem equal to suffix")]
#[test_case(PathStyle::Windows, "c:\\workspace\\tests\\st.js" ; "windows stem shorter than suffix")]
#[test_case(PathStyle::Windows, "c:\\workspace\\tests\\.TEST.js" ; "windows stem equal to suffix")]
fn test_stem_not_longer_than_suffix_has_no_source(style: PathStyle, path: &str) {
    let mut resolver = resolver(style, centralized_rules());
    assert_eq!(resolver.source_file(path), None);
}

#[test]
fn test_posix_is_case_sensitive() {
    let mut resolver = resolver(PathStyle::Posix, centralized_rules());
    assert_eq!(resolver.source_file("/workspace/Tests/utils/helper.test.js"), None);
    assert_eq!(resolver.test_candidates("/workspace/Src/utils/helper.js"), None);
}

#[test]
fn test_first_matching_rule_wins_in_reverse() {
    let mut resolver = resolver(
        PathStyle::Posix,
        vec![
            MappingRule::sibling("src", "__tests__", ".test"),
            MappingRule::sibling("src", "__tests__", ".e2e.test"),
        ],
    );
    // ".test" comes first and also strips ".e2e.test" files
    assert_eq!(
        resolver.source_file("/workspace/src/__tests__/helper.e2e.test.ts").as_deref(),
        Some("/workspace/src/helper.e2e.ts")
    );
}

// =============================================================================
// Round Trips
// =============================================================================

#[test_case(PathStyle::Posix, MappingRule::sibling("src", "__tests__", ".test"),
    "/workspace/src/utils/helper.mjs", "/workspace/src/utils/__tests__/helper.test.mjs" ; "posix sibling")]
#[test_case(PathStyle::Posix, MappingRule::sibling("src", "something/__tests__", ".test"),
    "/workspace/src/utils/helper.mjs", "/workspace/src/utils/something/__tests__/helper.test.mjs" ; "posix nested sibling")]
#[test_case(PathStyle::Posix, MappingRule::sibling("src", "/something/__tests__", ".test"),
    "/workspace/src/utils/helper.mjs", "/workspace/src/utils/something/__tests__/helper.test.mjs" ; "posix nested sibling leading slash")]
#[test_case(PathStyle::Posix, MappingRule::sibling("whatever/src", "__tests__", ".test"),
    "/workspace/whatever/src/utils/helper.mjs", "/workspace/whatever/src/utils/__tests__/helper.test.mjs" ; "posix deep source root")]
#[test_case(PathStyle::Posix, MappingRule::sibling("whatever/src", "something/__tests__", ".test"),
    "/workspace/whatever/src/utils/helper.mjs", "/workspace/whatever/src/utils/something/__tests__/helper.test.mjs" ; "posix deep source root nested sibling")]
#[test_case(PathStyle::Posix, MappingRule::centralized("whatever/src", "something/__tests__", ".test"),
    "/workspace/whatever/src/utils/helper.cjs", "/workspace/something/__tests__/utils/helper.test.cjs" ; "posix centralized")]
#[test_case(PathStyle::Windows, MappingRule::sibling("src", "__tests__", ".test"),
    "C:\\workspace\\src\\utils\\helper.mjs", "C:\\workspace\\src\\utils\\__tests__\\helper.test.mjs" ; "windows sibling")]
#[test_case(PathStyle::Windows, MappingRule::sibling("whatever/src", "something/__tests__", ".test"),
    "c:\\workspace\\whatever\\src\\utils\\helper.mjs", "c:\\workspace\\whatever\\src\\utils\\something\\__tests__\\helper.test.mjs" ; "windows deep source root nested sibling")]
#[test_case(PathStyle::Windows, MappingRule::centralized("whatever\\src", "something\\__tests__", ".test"),
    "c:\\workspace\\whatever\\src\\utils\\helper.cjs", "c:\\workspace\\something\\__tests__\\utils\\helper.test.cjs" ; "windows centralized")]
fn test_round_trip(style: PathStyle, rule: MappingRule, source: &str, test: &str) {
    let mut resolver = resolver(style, vec![rule]);
    assert_eq!(resolver.test_candidates(source), owned(&[test]));
    assert_eq!(resolver.source_file(test).as_deref(), Some(source));
}

// =============================================================================
// Network Share Roots
// =============================================================================

const UNC_ROOT: &str = "\\\\server\\share\\ws";

#[test_case(MappingRule::centralized("src", "tests", ".test"),
    "\\\\server\\share\\ws\\src\\a.js", "\\\\server\\share\\ws\\tests\\a.test.js" ; "centralized")]
#[test_case(MappingRule::sibling("src", "__tests__", ".test"),
    "\\\\server\\share\\ws\\src\\utils\\a.js", "\\\\server\\share\\ws\\src\\utils\\__tests__\\a.test.js" ; "sibling")]
fn test_unc_root_round_trip(rule: MappingRule, source: &str, test: &str) {
    let mut resolver = PathResolver::new(PathStyle::Windows, UNC_ROOT, vec![rule]);
    assert_eq!(resolver.test_candidates(source), owned(&[test]));
    assert_eq!(resolver.source_file(test).as_deref(), Some(source));
}

#[test]
fn test_unc_root_keeps_share_for_relative_inputs() {
    let mut resolver =
        PathResolver::new(PathStyle::Windows, UNC_ROOT, vec![MappingRule::centralized("src", "tests", ".test")]);
    assert_eq!(resolver.project_root(), UNC_ROOT);
    assert_eq!(
        resolver.test_candidates("src\\a.js"),
        owned(&["\\\\server\\share\\ws\\tests\\a.test.js"])
    );
    assert_eq!(resolver.test_candidates("\\\\server\\other\\ws\\src\\a.js"), None);
}

// =============================================================================
// Relative Inputs
// =============================================================================

#[test]
fn test_relative_paths_resolve_against_project_root() {
    let mut resolver = resolver(PathStyle::Posix, centralized_rules());
    assert_eq!(
        resolver.test_candidates("src/utils/helper.js"),
        resolver.test_candidates("/workspace/src/utils/helper.js")
    );
    assert_eq!(
        resolver.source_file("./tests/utils/helper.test.js").as_deref(),
        Some("/workspace/src/utils/helper.js")
    );
}

#[test]
fn test_project_root_is_normalized() {
    let resolver = PathResolver::new(PathStyle::Posix, "/workspace/./app/../", Vec::new());
    assert_eq!(resolver.project_root(), "/workspace");
}

// =============================================================================
// Caching
// =============================================================================

fn counting_resolver() -> (PathResolver<CountingOps>, std::rc::Rc<std::cell::Cell<usize>>) {
    let ops = CountingOps::new(PathStyle::Posix);
    let counter = ops.counter();
    let resolver = PathResolver::new(ops, POSIX_ROOT, centralized_rules());
    (resolver, counter)
}

#[test]
fn test_candidates_computed_once() {
    let (mut resolver, counter) = counting_resolver();

    let first = resolver.test_candidates("/workspace/src/utils/helper.js");
    let after_first = counter.get();
    assert!(after_first > 0);

    let second = resolver.test_candidates("/workspace/src/utils/helper.js");
    assert_eq!(first, second);
    assert_eq!(counter.get(), after_first);
}

#[test]
fn test_no_match_is_cached_too() {
    let (mut resolver, counter) = counting_resolver();

    assert_eq!(resolver.test_candidates("/workspace/other/helper.js"), None);
    let after_first = counter.get();
    assert_eq!(resolver.test_candidates("/workspace/other/helper.js"), None);
    assert_eq!(counter.get(), after_first);

    assert_eq!(resolver.source_file("/workspace/src/helper.js"), None);
    let after_source = counter.get();
    assert_eq!(resolver.source_file("/workspace/src/helper.js"), None);
    assert_eq!(counter.get(), after_source);
}

#[test]
fn test_cache_keyed_by_normalized_path() {
    let (mut resolver, counter) = counting_resolver();

    resolver.source_file("/workspace/tests/utils/helper.test.js");
    let after_first = counter.get();
    resolver.source_file("tests/utils/../utils/helper.test.js");
    assert_eq!(counter.get(), after_first);
}

#[test]
fn test_directions_cached_separately() {
    let (mut resolver, counter) = counting_resolver();

    let test = "/workspace/tests/utils/helper.test.js";
    assert_eq!(resolver.test_candidates(test), None);
    let after_forward = counter.get();
    assert!(resolver.source_file(test).is_some());
    assert!(counter.get() > after_forward);
}
