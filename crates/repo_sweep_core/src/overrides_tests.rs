use super::*;

#[test]
fn test_intent_defaults_to_keep() {
    let intent: Intent<bool> = Intent::default();
    assert_eq!(intent, Intent::Keep);
    assert!(!intent.is_set());
}

#[test]
fn test_keep_resolves_to_current_value() {
    assert!(Intent::<bool>::Keep.resolve(true));
    assert!(!Intent::<bool>::Keep.resolve(false));
    assert_eq!(Intent::<u32>::Keep.resolve(3), 3);
}

#[test]
fn test_set_wins_regardless_of_current_value() {
    assert!(Intent::Set(true).resolve(false));
    assert!(!Intent::Set(false).resolve(true));
    assert_eq!(Intent::Set(2u32).resolve(99), 2);
}

#[test]
fn test_intent_from_option() {
    assert_eq!(Intent::from(Some(true)), Intent::Set(true));
    assert_eq!(Intent::<bool>::from(None), Intent::Keep);
}

#[test]
fn test_list_intent_keep_passes_current_through() {
    let current = vec!["alpha".to_string(), "beta".to_string()];
    assert_eq!(ListIntent::Keep.resolve(current.clone()), current);
}

#[test]
fn test_list_intent_clear_empties_a_non_empty_list() {
    let current = vec!["alpha".to_string(), "beta".to_string()];
    assert!(ListIntent::Clear.resolve(current).is_empty());
}

#[test]
fn test_list_intent_replace_preserves_input_order() {
    let replacement = vec!["b".to_string(), "a".to_string(), "b".to_string()];
    let intent = ListIntent::Replace(replacement.clone());

    // Verbatim: no deduplication, no reordering.
    assert_eq!(
        intent.resolve(vec!["current".to_string()]),
        replacement
    );
}

#[test]
fn test_from_parts_rejects_clear_with_entries() {
    let result = ListIntent::from_parts(true, vec!["platform".to_string()]);
    assert!(matches!(result, Err(Error::InvalidOverrideCombination)));
}

#[test]
fn test_from_parts_clear_alone() {
    assert_eq!(
        ListIntent::from_parts(true, Vec::new()).unwrap(),
        ListIntent::Clear
    );
}

#[test]
fn test_from_parts_nothing_means_keep() {
    assert_eq!(
        ListIntent::from_parts(false, Vec::new()).unwrap(),
        ListIntent::Keep
    );
}

#[test]
fn test_from_parts_entries_mean_replace() {
    let names = vec!["platform".to_string(), "release".to_string()];
    assert_eq!(
        ListIntent::from_parts(false, names.clone()).unwrap(),
        ListIntent::Replace(names)
    );
}

#[test]
fn test_repository_overrides_default_to_all_keep() {
    let overrides = RepositorySettingsOverrides::new();

    assert_eq!(overrides.private, Intent::Keep);
    assert_eq!(overrides.issues, Intent::Keep);
    assert_eq!(overrides.wiki, Intent::Keep);
    assert_eq!(overrides.downloads, Intent::Keep);
    assert_eq!(overrides.merge_commits, Intent::Keep);
    assert_eq!(overrides.rebase_merges, Intent::Keep);
    assert_eq!(overrides.squash_merges, Intent::Keep);
}

#[test]
fn test_branch_protection_overrides_default_to_all_keep() {
    let overrides = BranchProtectionOverrides::new();

    assert_eq!(overrides.strict_status_checks, Intent::Keep);
    assert_eq!(overrides.required_approving_review_count, Intent::Keep);
    assert_eq!(overrides.push_restriction_teams, ListIntent::Keep);
}
