// Provider module: HTTP clients for the two data sources plus the
// pagination layer over ranked-list results.

pub mod fetcher;
pub mod serp;
pub mod traits;
pub mod youtube;

pub use fetcher::{PAGE_SIZE, ResultFetcher};
pub use serp::SerpClient;
pub use traits::{RankedListProvider, VideoProvider};
pub use youtube::YouTubeClient;
