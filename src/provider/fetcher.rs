use super::traits::RankedListProvider;
use crate::model::{ProviderError, SearchResultItem};
use chrono::Utc;

/// Results per page, fixed by the provider contract.
pub const PAGE_SIZE: u32 = 10;

/// Walks a ranked-list provider page by page and stamps each item with its
/// page number and fetch time.
pub struct ResultFetcher<'a, P: RankedListProvider> {
    provider: &'a P,
}

impl<'a, P: RankedListProvider> ResultFetcher<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Fetch one page of at most PAGE_SIZE items starting at `offset`.
    /// The page number (`offset / 10 + 1`) is assigned here, once.
    pub async fn fetch_page(
        &self,
        query: &str,
        offset: u32,
    ) -> Result<Vec<SearchResultItem>, ProviderError> {
        let page = offset / PAGE_SIZE + 1;
        let fetched_at = Utc::now();
        let raw = self.provider.search_page(query, offset).await?;

        Ok(raw
            .into_iter()
            .take(PAGE_SIZE as usize)
            .map(|r| SearchResultItem {
                position: r.position,
                page,
                title: r.title,
                snippet: r.snippet,
                link: r.link,
                fetched_at,
            })
            .collect())
    }

    /// Collect up to `n` items, advancing the offset by PAGE_SIZE per fetch.
    /// An empty page means the provider ran out of results and ends the loop,
    /// so a thin result set can never paginate forever. Errors propagate;
    /// retry policy is the caller's call.
    pub async fn fetch_n(
        &self,
        query: &str,
        n: usize,
    ) -> Result<Vec<SearchResultItem>, ProviderError> {
        let mut results = Vec::new();
        let mut offset = 0;

        while results.len() < n {
            let page = self.fetch_page(query, offset).await?;
            if page.is_empty() {
                tracing::debug!(query, offset, collected = results.len(), "provider exhausted");
                break;
            }
            results.extend(page);
            offset += PAGE_SIZE;
        }

        results.truncate(n);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RankedItem;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct PagedStub {
        pages: Vec<Vec<RankedItem>>,
        calls: AtomicUsize,
    }

    impl PagedStub {
        fn new(pages: Vec<Vec<RankedItem>>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl RankedListProvider for PagedStub {
        async fn search_page(
            &self,
            _query: &str,
            offset: u32,
        ) -> Result<Vec<RankedItem>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let idx = (offset / PAGE_SIZE) as usize;
            Ok(self.pages.get(idx).cloned().unwrap_or_default())
        }
    }

    fn items(start: u32, count: u32) -> Vec<RankedItem> {
        (1..=count)
            .map(|i| RankedItem {
                position: Some(start + i),
                title: format!("result {}", start + i),
                snippet: String::new(),
                link: String::new(),
            })
            .collect()
    }

    #[tokio::test]
    async fn twenty_items_take_exactly_two_page_fetches() {
        let stub = PagedStub::new(vec![items(0, 10), items(10, 10)]);
        let fetcher = ResultFetcher::new(&stub);

        let results = fetcher.fetch_n("smart fan", 20).await.unwrap();

        assert_eq!(results.len(), 20);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
        assert!(results[..10].iter().all(|r| r.page == 1));
        assert!(results[10..].iter().all(|r| r.page == 2));
    }

    #[tokio::test]
    async fn empty_page_ends_pagination_before_target() {
        let stub = PagedStub::new(vec![items(0, 10)]);
        let fetcher = ResultFetcher::new(&stub);

        let results = fetcher.fetch_n("smart fan", 30).await.unwrap();

        assert_eq!(results.len(), 10);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn short_final_page_is_kept_then_loop_ends() {
        let stub = PagedStub::new(vec![items(0, 10), items(10, 3)]);
        let fetcher = ResultFetcher::new(&stub);

        let results = fetcher.fetch_n("smart fan", 30).await.unwrap();

        assert_eq!(results.len(), 13);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 3);
        assert_eq!(results[12].page, 2);
    }

    #[tokio::test]
    async fn result_is_truncated_to_requested_count() {
        let stub = PagedStub::new(vec![items(0, 10), items(10, 10)]);
        let fetcher = ResultFetcher::new(&stub);

        let results = fetcher.fetch_n("smart fan", 15).await.unwrap();

        assert_eq!(results.len(), 15);
        assert_eq!(results.last().unwrap().position, Some(15));
    }

    #[tokio::test]
    async fn oversized_page_is_clamped_to_page_size() {
        let stub = PagedStub::new(vec![items(0, 14)]);
        let fetcher = ResultFetcher::new(&stub);

        let results = fetcher.fetch_page("smart fan", 0).await.unwrap();

        assert_eq!(results.len(), PAGE_SIZE as usize);
    }
}
