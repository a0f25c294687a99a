//! Lazy iteration over paginated list endpoints.

use std::collections::VecDeque;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpClient, RequestSpec};

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Position within a paginated listing. Advances monotonically and is never
/// reused once exhausted.
#[derive(Clone, Copy, Debug)]
pub struct PageCursor {
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

/// Continuation metadata carried by paginated responses. Every field is
/// optional; endpoints differ in which ones they populate.
#[derive(Deserialize, Debug, Default)]
struct PageMeta {
    #[serde(default)]
    has_more: Option<bool>,
    #[serde(default)]
    next_page: Option<u32>,
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    total_items: Option<u64>,
}

/// List endpoints answer either with a `{"data", "meta"}` envelope or with a
/// bare array (a complete, single page).
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PageBody<T> {
    Envelope {
        data: Vec<T>,
        #[serde(default)]
        meta: Option<PageMeta>,
    },
    Items(Vec<T>),
}

#[derive(Debug)]
enum IterState {
    Active,
    Exhausted,
    Failed(ApiError),
}

/// Lazy sequence of resource items fetched page by page.
///
/// Items are yielded in server order and no page is fetched twice. After the
/// final page no further network calls are made. A fetch failure poisons the
/// iterator permanently: the error is returned and every later call returns
/// the same error. Not restartable; issue a new list call for a fresh pass.
pub struct PageIterator<T> {
    http: HttpClient,
    path: String,
    base_query: Vec<(String, String)>,
    cursor: PageCursor,
    buffer: VecDeque<T>,
    state: IterState,
}

impl<T: DeserializeOwned> PageIterator<T> {
    pub(crate) fn new(http: HttpClient, path: impl Into<String>) -> Self {
        Self {
            http,
            path: path.into(),
            base_query: Vec::new(),
            cursor: PageCursor {
                page: 1,
                page_size: DEFAULT_PAGE_SIZE,
                has_more: true,
            },
            buffer: VecDeque::new(),
            state: IterState::Active,
        }
    }

    /// Adds a filter query parameter, preserved on every page request.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.base_query.push((key.into(), value.into()));
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.cursor.page_size = page_size.max(1);
        self
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Next item in server order; `Ok(None)` once the listing is exhausted.
    pub async fn try_next(&mut self) -> Result<Option<T>, ApiError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            match &self.state {
                IterState::Failed(err) => return Err(err.clone()),
                IterState::Exhausted => return Ok(None),
                IterState::Active => {}
            }
            self.fetch_page().await?;
        }
    }

    /// Drains the remaining items into a vector.
    pub async fn collect_all(mut self) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    async fn fetch_page(&mut self) -> Result<(), ApiError> {
        let mut spec = RequestSpec::get(&self.path);
        for (key, value) in &self.base_query {
            spec = spec.query(key.clone(), value.clone());
        }
        spec = spec
            .query("page", self.cursor.page.to_string())
            .query("page_size", self.cursor.page_size.to_string());

        match self.http.execute::<PageBody<T>>(spec).await {
            Ok(PageBody::Envelope { data, meta }) => {
                let empty_page = data.is_empty();
                self.buffer.extend(data);
                self.advance(meta);
                // An empty page ends the listing even if metadata disagrees.
                if empty_page || !self.cursor.has_more {
                    self.cursor.has_more = false;
                    self.state = IterState::Exhausted;
                }
                Ok(())
            }
            Ok(PageBody::Items(items)) => {
                self.buffer.extend(items);
                self.cursor.has_more = false;
                self.state = IterState::Exhausted;
                Ok(())
            }
            Err(err) => {
                self.state = IterState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Advances the cursor from response metadata. Absent or null metadata
    /// means the listing is complete.
    fn advance(&mut self, meta: Option<PageMeta>) {
        let Some(meta) = meta else {
            self.cursor.has_more = false;
            return;
        };

        let page = meta.current_page.unwrap_or(self.cursor.page);
        let page_size = meta.page_size.unwrap_or(self.cursor.page_size);

        let has_more = if let Some(flag) = meta.has_more {
            flag
        } else if meta.next_page.is_some() {
            true
        } else if let Some(total) = meta.total_items {
            u64::from(page) * u64::from(page_size) < total
        } else {
            false
        };

        self.cursor.page = meta.next_page.unwrap_or(page + 1);
        self.cursor.has_more = has_more;
    }
}
