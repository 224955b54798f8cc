use crate::model::{BrandEngagement, VideoStats, VideoStatsItem};

/// Normalized interaction metric for one video:
/// `(likes + comments) / views * 100`, rounded to 4 decimal digits.
///
/// Zero views return exactly 0 instead of an undefined ratio. That can
/// understate engagement for brand-new videos; it is an accepted
/// approximation, kept so the aggregate never sees a NaN.
pub fn engagement_rate(views: u64, likes: u64, comments: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    let rate = (likes + comments) as f64 / views as f64 * 100.0;
    (rate * 10_000.0).round() / 10_000.0
}

/// Attach the brand query and the derived rate to each raw stats record.
pub fn rate_videos(brand_query: &str, stats: Vec<VideoStats>) -> Vec<VideoStatsItem> {
    stats
        .into_iter()
        .map(|s| VideoStatsItem {
            brand_query: brand_query.to_string(),
            engagement_rate: engagement_rate(s.views, s.likes, s.comments),
            title: s.title,
            views: s.views,
            likes: s.likes,
            comments: s.comments,
        })
        .collect()
}

/// Mean engagement rate per brand query. Grouping is on the literal query
/// string, so no row is ever dropped; groups come out in first-seen input
/// order, which keeps reruns deterministic.
pub fn aggregate_engagement(items: &[VideoStatsItem]) -> Vec<BrandEngagement> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(query, _)| query == &item.brand_query) {
            Some((_, rates)) => rates.push(item.engagement_rate),
            None => groups.push((item.brand_query.clone(), vec![item.engagement_rate])),
        }
    }

    groups
        .into_iter()
        .map(|(brand_query, rates)| BrandEngagement {
            avg_engagement_rate: rates.iter().sum::<f64>() / rates.len() as f64,
            brand_query,
        })
        .collect()
}
