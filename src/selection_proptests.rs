use super::*;
use proptest::prelude::*;

/// 登録済みエンティティ名の空でない部分集合を生成する
fn requested_strategy() -> impl Strategy<Value = Vec<String>> {
    let all: Vec<&'static str> = Registry::new().list().collect();
    let len = all.len();
    proptest::sample::subsequence(all, 1..=len)
        .prop_map(|names| names.into_iter().map(str::to_string).collect())
}

proptest! {
    /// 要求したエンティティは必ず選択されて終わる
    #[test]
    fn prop_requested_entities_end_selected(requested in requested_strategy()) {
        let mut registry = Registry::new();
        expand(&mut registry, &requested).unwrap();

        for name in &requested {
            prop_assert!(registry.describe(name).unwrap().is_selected());
        }
    }

    /// 要求したエンティティの直接の依存先も選択されて終わる（1ホップ保証）
    #[test]
    fn prop_direct_prerequisites_end_selected(requested in requested_strategy()) {
        let mut registry = Registry::new();
        expand(&mut registry, &requested).unwrap();

        for name in &requested {
            if let Some(dep) = registry.describe(name).unwrap().depends_on {
                prop_assert!(registry.describe(dep).unwrap().is_selected());
            }
        }
    }

    /// 要求していないエンティティは、誰かの依存先でない限り選択されない
    #[test]
    fn prop_unrelated_entities_stay_unselected(requested in requested_strategy()) {
        let mut registry = Registry::new();
        expand(&mut registry, &requested).unwrap();

        let prerequisites: Vec<&str> = requested
            .iter()
            .filter_map(|name| registry.describe(name).unwrap().depends_on)
            .collect();

        for entry in registry.entries() {
            if entry.is_selected() {
                prop_assert!(
                    requested.iter().any(|r| r == entry.name)
                        || prerequisites.contains(&entry.name),
                    "{} was selected without being requested or required",
                    entry.name
                );
            }
        }
    }

    /// 同じ要求で2回展開しても結果は変わらない
    #[test]
    fn prop_expand_is_idempotent(requested in requested_strategy()) {
        let mut registry = Registry::new();
        expand(&mut registry, &requested).unwrap();
        let first: Vec<&str> = registry
            .entries()
            .iter()
            .filter(|e| e.is_selected())
            .map(|e| e.name)
            .collect();

        expand(&mut registry, &requested).unwrap();
        let second: Vec<&str> = registry
            .entries()
            .iter()
            .filter(|e| e.is_selected())
            .map(|e| e.name)
            .collect();

        prop_assert_eq!(first, second);
    }
}
