mod analyzer;
mod config;
mod matcher;
mod model;
mod provider;
mod report;

use analyzer::{engagement, visibility};
use config::{AppConfig, env_key, load_config};
use futures::future::join_all;
use model::VideoStatsItem;
use provider::{ResultFetcher, SerpClient, VideoProvider, YouTubeClient};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // .env is optional; deployments may set the variables directly.
    dotenvy::dotenv().ok();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let out_dir = Path::new(&config.output_dir).to_path_buf();
    if let Err(e) = fs::create_dir_all(&out_dir) {
        error!("Failed to create output directory: {}", e);
        return;
    }

    let serp_key = match env_key("SERPAPI_KEY") {
        Ok(key) => key,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    let yt_key = match env_key("YTAPI_KEY") {
        Ok(key) => key,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let search = SerpClient::new(serp_key, config.search_params.clone());
    let videos = YouTubeClient::new(yt_key);

    info!("🚀 brandlens started");

    run_visibility(&config, &search, &out_dir).await;
    run_engagement(&config, &videos, &out_dir).await;

    info!("Done.");
}

/// Search pipeline: paginated fetch, brand classification, position
/// weighting, per-brand totals, CSV + chart export.
async fn run_visibility(config: &AppConfig, search: &SerpClient, out_dir: &Path) {
    info!(
        "Fetching up to {} results for '{}'...",
        config.target_results, config.search_query
    );

    let fetcher = ResultFetcher::new(search);
    let items = match fetcher
        .fetch_n(&config.search_query, config.target_results)
        .await
    {
        Ok(items) => items,
        Err(e) => {
            warn!("Search fetch failed: {}", e);
            return;
        }
    };
    info!("Fetched {} results", items.len());

    let classified = visibility::score_items(&items, &config.brands);
    let ranked = visibility::aggregate_visibility(&classified);

    if ranked.is_empty() {
        warn!("No brands detected for '{}'", config.search_query);
    }
    info!("=== Brand Visibility Score ===");
    for row in &ranked {
        info!("{}: {}", row.brand, row.score);
    }

    let detection_path = out_dir.join("google_brand_detection.csv");
    match report::write_detection_csv(&detection_path, &classified) {
        Ok(()) => info!("📁 Saved {}", detection_path.display()),
        Err(e) => warn!("Detection export failed: {}", e),
    }

    let scores_path = out_dir.join("brand_scores.csv");
    match report::write_scores_csv(&scores_path, &ranked) {
        Ok(()) => info!("📁 Saved {}", scores_path.display()),
        Err(e) => warn!("Scores export failed: {}", e),
    }

    let chart_rows: Vec<(String, f64)> =
        ranked.iter().map(|r| (r.brand.clone(), r.score)).collect();
    let chart_path = out_dir.join("brand_visibility.png");
    match report::render_bar_chart(
        &chart_path,
        "Brand Visibility Score",
        "Brand",
        "Score",
        &chart_rows,
    ) {
        Ok(()) if chart_rows.is_empty() => {}
        Ok(()) => info!("📊 Saved {}", chart_path.display()),
        Err(e) => warn!("Chart rendering failed: {}", e),
    }
}

/// Video pipeline: one query per configured brand, processed concurrently;
/// each query accumulates locally and the partial results are merged after
/// the join.
async fn run_engagement(config: &AppConfig, videos: &YouTubeClient, out_dir: &Path) {
    let queries = config.brand_queries();
    info!(
        "🔧 Running video engagement analysis for {} brand queries",
        queries.len()
    );

    let tasks: Vec<_> = queries
        .iter()
        .map(|query| process_brand_query(videos, query, config.max_videos_per_brand))
        .collect();
    let per_query = join_all(tasks).await;
    let all_items: Vec<VideoStatsItem> = per_query.into_iter().flatten().collect();

    let summary = engagement::aggregate_engagement(&all_items);
    info!("=== Average Engagement Rates ===");
    for row in &summary {
        info!("{}: {:.4}%", row.brand_query, row.avg_engagement_rate);
    }

    let data_path = out_dir.join("youtube_brand_data.csv");
    match report::write_video_csv(&data_path, &all_items) {
        Ok(()) => info!("📁 Saved {}", data_path.display()),
        Err(e) => warn!("Video export failed: {}", e),
    }

    let summary_path = out_dir.join("youtube_brand_scores.csv");
    match report::write_engagement_csv(&summary_path, &summary) {
        Ok(()) => info!("📁 Saved {}", summary_path.display()),
        Err(e) => warn!("Engagement export failed: {}", e),
    }

    let chart_rows: Vec<(String, f64)> = summary
        .iter()
        .map(|r| (r.brand_query.clone(), r.avg_engagement_rate))
        .collect();
    let chart_path = out_dir.join("youtube_engagement.png");
    match report::render_bar_chart(
        &chart_path,
        &format!("YouTube Engagement Analysis for '{}'", config.video_keyword),
        "Brand query",
        "Average engagement rate (%)",
        &chart_rows,
    ) {
        Ok(()) if chart_rows.is_empty() => {}
        Ok(()) => info!("📊 Saved {}", chart_path.display()),
        Err(e) => warn!("Chart rendering failed: {}", e),
    }
}

/// Processes a single brand query: video search, stats fetch, per-video
/// engagement. A failed query logs and contributes nothing; it never aborts
/// the batch.
async fn process_brand_query(
    videos: &impl VideoProvider,
    brand_query: &str,
    max_results: u32,
) -> Vec<VideoStatsItem> {
    info!("🔍 Searching videos for: {}", brand_query);

    let ids = match videos.search_videos(brand_query, max_results).await {
        Ok(ids) => ids,
        Err(e) => {
            warn!("Video search failed for '{}': {}", brand_query, e);
            return Vec::new();
        }
    };
    if ids.is_empty() {
        info!("No videos found for '{}'", brand_query);
        return Vec::new();
    }

    let stats = match videos.video_stats(&ids).await {
        Ok(stats) => stats,
        Err(e) => {
            warn!("Video stats failed for '{}': {}", brand_query, e);
            return Vec::new();
        }
    };

    engagement::rate_videos(brand_query, stats)
}
