use super::*;
use crate::test_fixtures::{expert, mixed_directory, supplier};

fn ids(profiles: &[Profile]) -> Vec<&str> {
    profiles.iter().map(Profile::id).collect()
}

fn criteria_with_query(q: &str) -> DirectoryCriteria {
    DirectoryCriteria {
        query: Some(q.to_string()),
        ..DirectoryCriteria::default()
    }
}

#[test]
fn empty_query_returns_input_unchanged() {
    let profiles = mixed_directory();
    let filter = ProfileDirectoryFilter::default();
    assert_eq!(filter.filter(&profiles, &criteria_with_query("")), profiles);
    assert_eq!(filter.filter(&profiles, &DirectoryCriteria::default()), profiles);
}

#[test]
fn query_whitespace_is_matched_as_typed() {
    let filter = ProfileDirectoryFilter::default();
    let profiles = vec![supplier("a", "Green Mill", &[])];

    assert!(filter.filter(&profiles, &criteria_with_query("   ")).is_empty());
    assert!(filter.filter(&profiles, &criteria_with_query(" green")).is_empty());
    assert_eq!(ids(&filter.filter(&profiles, &criteria_with_query("mill "))), vec!["a"]);
    assert_eq!(criteria_with_query(" cotton").query_text(), Some(" cotton"));
}

#[test]
fn query_is_case_insensitive_over_name() {
    let filter = ProfileDirectoryFilter::default();
    let result = filter.filter(&mixed_directory(), &criteria_with_query("SARAH"));
    assert_eq!(ids(&result), vec!["3"]);
}

#[test]
fn query_matches_bio_and_role_list() {
    let filter = ProfileDirectoryFilter::default();
    let by_skill = filter.filter(&mixed_directory(), &criteria_with_query("supply chain"));
    assert_eq!(ids(&by_skill), vec!["5"]);

    let by_capability = filter.filter(&mixed_directory(), &criteria_with_query("full_production"));
    assert_eq!(ids(&by_capability), vec!["1", "4"]);

    let by_bio = filter.filter(&mixed_directory(), &criteria_with_query("streetwear label"));
    assert_eq!(ids(&by_bio), vec!["2"]);
}

#[test]
fn tag_filter_includes_and_excludes() {
    let filter = ProfileDirectoryFilter::default();
    let criteria = DirectoryCriteria {
        tag: Some(Tag::Sustainable),
        ..DirectoryCriteria::default()
    };
    let with_tag = supplier("a", "Green Mill", &[Tag::Sustainable, Tag::LowMoq]);
    let without_tag = supplier("b", "Quick Mill", &[Tag::FastTurnaround]);
    let result = filter.filter(&[with_tag, without_tag], &criteria);
    assert_eq!(ids(&result), vec!["a"]);
}

#[test]
fn tag_filter_excludes_brands() {
    let filter = ProfileDirectoryFilter::default();
    let criteria = DirectoryCriteria {
        tag: Some(Tag::LowMoq),
        ..DirectoryCriteria::default()
    };
    let result = filter.filter(&mixed_directory(), &criteria);
    assert_eq!(ids(&result), vec!["1", "4"]);
}

#[test]
fn role_and_region_are_applied_client_side() {
    let filter = ProfileDirectoryFilter::default();
    let experts = DirectoryCriteria {
        role: Some(UserRole::Expert),
        ..DirectoryCriteria::default()
    };
    assert_eq!(ids(&filter.filter(&mixed_directory(), &experts)), vec!["3", "5"]);

    let international = DirectoryCriteria {
        region: Some("International".to_string()),
        ..DirectoryCriteria::default()
    };
    assert_eq!(
        ids(&filter.filter(&mixed_directory(), &international)),
        vec!["1", "4"]
    );
}

#[test]
fn filtering_is_idempotent() {
    let filter = ProfileDirectoryFilter::default();
    let criteria_set = [
        DirectoryCriteria::default(),
        criteria_with_query("mill"),
        DirectoryCriteria {
            tag: Some(Tag::FastTurnaround),
            query: Some("pattern".to_string()),
            ..DirectoryCriteria::default()
        },
        DirectoryCriteria {
            role: Some(UserRole::Supplier),
            region: Some("AU".to_string()),
            tag: Some(Tag::LowMoq),
            query: Some("cotton".to_string()),
        },
    ];
    for criteria in &criteria_set {
        let once = filter.filter(&mixed_directory(), criteria);
        let twice = filter.filter(&once, criteria);
        assert_eq!(once, twice, "not idempotent for {criteria:?}");
    }
}

#[test]
fn filtering_preserves_input_order() {
    let filter = ProfileDirectoryFilter::default();
    let mut profiles = mixed_directory();
    profiles.reverse();
    let criteria = DirectoryCriteria {
        tag: Some(Tag::FastTurnaround),
        ..DirectoryCriteria::default()
    };
    assert_eq!(ids(&filter.filter(&profiles, &criteria)), vec!["4", "3"]);
}

#[test]
fn featured_is_first_three_of_filtered_result() {
    let filter = ProfileDirectoryFilter::default();
    let view = filter.apply(&mixed_directory(), &DirectoryCriteria::default());
    assert_eq!(view.len(), 5);
    assert_eq!(ids(view.featured()), vec!["1", "2", "3"]);

    let experts = DirectoryCriteria {
        role: Some(UserRole::Expert),
        ..DirectoryCriteria::default()
    };
    let view = filter.apply(&mixed_directory(), &experts);
    assert_eq!(ids(view.featured()), vec!["3", "5"]);
}

#[test]
fn featured_count_is_configurable() {
    let view = ProfileDirectoryFilter::new(1).apply(&mixed_directory(), &DirectoryCriteria::default());
    assert_eq!(ids(view.featured()), vec!["1"]);
    let none = ProfileDirectoryFilter::new(0).apply(&mixed_directory(), &DirectoryCriteria::default());
    assert!(none.featured().is_empty());
}

#[test]
fn empty_result_has_no_featured() {
    let view = ProfileDirectoryFilter::default()
        .apply(&mixed_directory(), &criteria_with_query("no such professional"));
    assert!(view.is_empty());
    assert!(view.featured().is_empty());
    assert_eq!(view.result_label(), "0 professionals");
}

#[test]
fn result_label_is_singular_for_one() {
    let view = ProfileDirectoryFilter::default()
        .apply(&[expert("3", "Sarah Chen", &["Grading"], &[])], &DirectoryCriteria::default());
    assert_eq!(view.result_label(), "1 professional");
}

#[test]
fn criteria_forward_role_and_region_only() {
    let criteria = DirectoryCriteria {
        role: Some(UserRole::Supplier),
        region: Some("AU".to_string()),
        tag: Some(Tag::LowMoq),
        query: Some("mill".to_string()),
    };
    let filters = criteria.to_profile_filters();
    assert_eq!(filters.role, vec![UserRole::Supplier]);
    assert_eq!(filters.region, vec!["AU".to_string()]);
    assert!(filters.tags.is_empty());
    assert!(criteria.has_filters());

    let mut cleared = criteria.clone();
    cleared.clear();
    assert!(!cleared.has_filters());
    assert!(cleared.query_text().is_none());
}

#[test]
fn stats_count_each_role() {
    let stats = DirectoryStats::from_profiles(&mixed_directory());
    assert_eq!(stats.brands, 1);
    assert_eq!(stats.suppliers, 2);
    assert_eq!(stats.experts, 2);
    assert_eq!(stats.total(), 5);
}
