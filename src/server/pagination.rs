use serde::Deserialize;

use super::deserializers::deserialize_lenient_i64;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Window of at most [`QUESTIONS_PER_PAGE`] items for a 1-based page.
/// Pages before the first or past the last yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Ok(index) = usize::try_from(page.saturating_sub(1)) else {
        return &[];
    };
    let start = index.saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
