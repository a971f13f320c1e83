use super::*;

fn identifiers(names: &[&str]) -> FxHashSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn test_first_name_gets_suffix_one() {
    let mut names = UniqueNameGenerator::new(identifiers(&["utils"]));
    assert_eq!(names.make_unique_name("utils"), "utils_1");
}

#[test]
fn test_skips_names_used_in_the_file() {
    let mut names = UniqueNameGenerator::new(identifiers(&["ns", "ns_1", "ns_2"]));
    assert_eq!(names.make_unique_name("ns"), "ns_3");
}

#[test]
fn test_never_repeats_a_generated_name() {
    let mut names = UniqueNameGenerator::new(FxHashSet::default());
    assert_eq!(names.make_unique_name("a"), "a_1");
    assert_eq!(names.make_unique_name("a"), "a_2");
    assert_eq!(names.make_unique_name("b"), "b_1");
}

#[test]
fn test_trailing_underscore_is_not_doubled() {
    let mut names = UniqueNameGenerator::new(FxHashSet::default());
    assert_eq!(names.make_unique_name("lib_"), "lib_1");
}

#[test]
fn test_string_names_are_sanitized() {
    assert_eq!(sanitize_identifier("a-b"), "a_b");
    assert_eq!(sanitize_identifier("1st"), "_1st");
    assert_eq!(sanitize_identifier("@scope/pkg"), "_scope_pkg");
    assert_eq!(sanitize_identifier(""), "_");

    let mut names = UniqueNameGenerator::new(FxHashSet::default());
    assert_eq!(names.make_unique_name("my-lib"), "my_lib_1");
}
