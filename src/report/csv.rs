use crate::model::{BrandEngagement, BrandScore, ClassifiedItem, ExportError, VideoStatsItem};
use std::fs;
use std::path::Path;

// Quote a field only when it needs it; inner quotes are doubled.
fn field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Per-item detection table: every fetched result with its page, matched
/// brand (empty when unmatched) and position weight.
pub fn write_detection_csv(path: &Path, items: &[ClassifiedItem]) -> Result<(), ExportError> {
    let mut out = String::from("position,page,title,snippet,link,brand,score,fetched_at\n");
    for classified in items {
        let item = &classified.item;
        let position = item.position.map(|p| p.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            position,
            item.page,
            field(&item.title),
            field(&item.snippet),
            field(&item.link),
            field(classified.brand.as_deref().unwrap_or("")),
            classified.score,
            item.fetched_at.to_rfc3339(),
        ));
    }
    fs::write(path, out)?;
    Ok(())
}

/// Ranked visibility summary, one row per brand.
pub fn write_scores_csv(path: &Path, scores: &[BrandScore]) -> Result<(), ExportError> {
    let mut out = String::from("brand,score\n");
    for row in scores {
        out.push_str(&format!("{},{}\n", field(&row.brand), row.score));
    }
    fs::write(path, out)?;
    Ok(())
}

/// Per-video engagement table.
pub fn write_video_csv(path: &Path, items: &[VideoStatsItem]) -> Result<(), ExportError> {
    let mut out = String::from("brand_query,video_title,views,likes,comments,engagement_rate\n");
    for item in items {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            field(&item.brand_query),
            field(&item.title),
            item.views,
            item.likes,
            item.comments,
            item.engagement_rate,
        ));
    }
    fs::write(path, out)?;
    Ok(())
}

/// Mean engagement per brand query.
pub fn write_engagement_csv(path: &Path, rows: &[BrandEngagement]) -> Result<(), ExportError> {
    let mut out = String::from("brand_query,avg_engagement_rate\n");
    for row in rows {
        out.push_str(&format!(
            "{},{:.4}\n",
            field(&row.brand_query),
            row.avg_engagement_rate
        ));
    }
    fs::write(path, out)?;
    Ok(())
}
