use crate::domain::model::{Category, Movie};
use serde::Serialize;

/// 分類加上搜尋字串的篩選條件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFilter {
    pub category: Category,
    pub query: String,
}

impl CatalogFilter {
    pub fn new(category: Category, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// 片名不分大小寫包含搜尋字串，或年份原樣包含搜尋字串
    pub fn matches(&self, movie: &Movie) -> bool {
        let matches_category = self.category == Category::All || movie.category == self.category;
        let matches_search = movie
            .title()
            .to_lowercase()
            .contains(&self.query.to_lowercase())
            || movie.year().contains(&self.query);

        matches_category && matches_search
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }
}
