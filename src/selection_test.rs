//! 選択展開のユニットテスト

use super::*;
use crate::error::SwimError;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn selected(registry: &Registry) -> Vec<&'static str> {
    registry
        .entries()
        .iter()
        .filter(|e| e.is_selected())
        .map(|e| e.name)
        .collect()
}

#[test]
fn requested_entity_is_selected() {
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["template-snippet"])).unwrap();
    assert_eq!(selected(&registry), vec!["template-snippet"]);
}

#[test]
fn all_token_selects_everything() {
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["all"])).unwrap();
    assert_eq!(selected(&registry).len(), registry.entries().len());
}

#[test]
fn all_token_wins_over_explicit_names() {
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["user", "all"])).unwrap();
    assert_eq!(selected(&registry).len(), registry.entries().len());
}

#[test]
fn direct_prerequisite_is_selected() {
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["user"])).unwrap();
    assert_eq!(selected(&registry), vec!["organization", "user"]);
}

#[test]
fn expansion_is_one_hop_only() {
    // content-view -> repository は選択されるが、repository -> organization
    // までは辿らない
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["content-view"])).unwrap();
    assert_eq!(selected(&registry), vec!["repository", "content-view"]);
}

#[test]
fn prerequisites_do_not_select_their_dependents() {
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["organization"])).unwrap();
    assert_eq!(selected(&registry), vec!["organization"]);
}

#[test]
fn unknown_entity_is_rejected() {
    let mut registry = Registry::new();
    let err = expand(&mut registry, &names(&["flux-capacitor"])).unwrap_err();
    assert!(matches!(err, SwimError::UnknownEntity(ref name) if name == "flux-capacitor"));
}

#[test]
fn expand_is_idempotent() {
    let mut registry = Registry::new();
    expand(&mut registry, &names(&["user", "repository"])).unwrap();
    let first = selected(&registry);
    expand(&mut registry, &names(&["user", "repository"])).unwrap();
    assert_eq!(selected(&registry), first);
}
