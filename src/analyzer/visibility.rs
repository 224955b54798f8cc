use crate::config::BrandEntry;
use crate::matcher;
use crate::model::{BrandScore, ClassifiedItem, SearchResultItem};
use std::cmp::Ordering;

/// Weight of a rank position. Positions 1..=10 decay linearly from 100 to
/// 10; everything else — missing positions included — still counts, but
/// only at the fallback weight.
pub const FALLBACK_WEIGHT: f64 = 5.0;

pub fn position_weight(position: Option<u32>) -> f64 {
    match position {
        Some(p @ 1..=10) => (110 - 10 * p) as f64,
        _ => FALLBACK_WEIGHT,
    }
}

/// Classify and weight every fetched item. Unmatched items keep their
/// weight and a `None` brand; aggregation drops them, the detection export
/// keeps them.
pub fn score_items(items: &[SearchResultItem], brands: &[BrandEntry]) -> Vec<ClassifiedItem> {
    items
        .iter()
        .map(|item| ClassifiedItem {
            brand: matcher::classify(item, brands).map(str::to_string),
            score: position_weight(item.position),
            item: item.clone(),
        })
        .collect()
}

/// Sum weights per brand and rank brands by total, descending. Items with
/// no matched brand are excluded. The sort is stable, so brands with equal
/// totals stay in first-seen input order.
pub fn aggregate_visibility(items: &[ClassifiedItem]) -> Vec<BrandScore> {
    let mut totals: Vec<BrandScore> = Vec::new();

    for classified in items {
        let Some(brand) = &classified.brand else {
            continue;
        };
        match totals.iter_mut().find(|row| &row.brand == brand) {
            Some(row) => row.score += classified.score,
            None => totals.push(BrandScore {
                brand: brand.clone(),
                score: classified.score,
            }),
        }
    }

    totals.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(position: Option<u32>, title: &str, link: &str) -> SearchResultItem {
        SearchResultItem {
            position,
            page: 1,
            title: title.to_string(),
            snippet: String::new(),
            link: link.to_string(),
            fetched_at: Utc::now(),
        }
    }

    fn table() -> Vec<BrandEntry> {
        vec![
            BrandEntry {
                name: "Atomberg".to_string(),
                terms: vec!["atomberg".to_string()],
            },
            BrandEntry {
                name: "Orient".to_string(),
                terms: vec!["orient".to_string()],
            },
        ]
    }

    #[test]
    fn top_ten_positions_decay_linearly() {
        for p in 1..=10u32 {
            assert_eq!(position_weight(Some(p)), (110 - 10 * p) as f64);
        }
    }

    #[test]
    fn everything_else_gets_the_fallback_weight() {
        assert_eq!(position_weight(Some(0)), FALLBACK_WEIGHT);
        assert_eq!(position_weight(Some(11)), FALLBACK_WEIGHT);
        assert_eq!(position_weight(Some(1000)), FALLBACK_WEIGHT);
        assert_eq!(position_weight(None), FALLBACK_WEIGHT);
    }

    #[test]
    fn end_to_end_scoring_and_ranking() {
        let items = vec![
            item(Some(1), "Atomberg smart fan", "https://atomberg.com"),
            item(Some(2), "Orient smart fan", "https://orientfan.com"),
            item(Some(11), "Generic fan", "https://x.com"),
        ];
        let classified = score_items(&items, &table());

        assert_eq!(classified[0].brand.as_deref(), Some("Atomberg"));
        assert_eq!(classified[0].score, 100.0);
        assert_eq!(classified[1].brand.as_deref(), Some("Orient"));
        assert_eq!(classified[1].score, 90.0);
        assert_eq!(classified[2].brand, None);

        let ranked = aggregate_visibility(&classified);
        assert_eq!(
            ranked,
            vec![
                BrandScore {
                    brand: "Atomberg".to_string(),
                    score: 100.0
                },
                BrandScore {
                    brand: "Orient".to_string(),
                    score: 90.0
                },
            ]
        );
    }

    #[test]
    fn totals_sum_across_repeat_appearances() {
        let items = vec![
            item(Some(2), "Orient fan", ""),
            item(Some(1), "Atomberg fan", ""),
            item(Some(3), "another Orient fan", ""),
        ];
        let ranked = aggregate_visibility(&score_items(&items, &table()));

        assert_eq!(ranked[0].brand, "Orient");
        assert_eq!(ranked[0].score, 170.0);
        assert_eq!(ranked[1].brand, "Atomberg");
        assert_eq!(ranked[1].score, 100.0);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let items = vec![
            item(Some(3), "Orient fan", ""),
            item(Some(3), "Atomberg fan", ""),
        ];
        let ranked = aggregate_visibility(&score_items(&items, &table()));

        assert_eq!(ranked[0].brand, "Orient");
        assert_eq!(ranked[1].brand, "Atomberg");
    }

    #[test]
    fn aggregation_is_deterministic_across_reruns() {
        let items = vec![
            item(Some(1), "Atomberg fan", ""),
            item(Some(2), "Orient fan", ""),
            item(None, "Atomberg spare", ""),
        ];
        let classified = score_items(&items, &table());
        assert_eq!(
            aggregate_visibility(&classified),
            aggregate_visibility(&classified)
        );
    }

    #[test]
    fn no_matches_yield_an_empty_table() {
        let items = vec![item(Some(1), "Generic fan", "https://x.com")];
        let ranked = aggregate_visibility(&score_items(&items, &table()));
        assert!(ranked.is_empty());
    }
}
