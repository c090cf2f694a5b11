use crate::core::catalog::Catalog;
use crate::core::filter::CatalogFilter;
use crate::domain::model::{Category, Movie, MovieDetails};
use crate::utils::error::{CatalogError, Result};

/// 瀏覽狀態：目前分類、搜尋字串、開啟中的下載視窗
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    filter: CatalogFilter,
    modal: Option<MovieDetails>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn select_category(&mut self, category: Category) {
        self.filter.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Movie> {
        catalog.filter(&self.filter)
    }

    /// `target` 可以是目前列表中的位置 (從 1 開始) 或 IMDb id。
    /// 找不到時回傳 `NotFound`，狀態不變。
    pub fn open(&mut self, catalog: &Catalog, target: &str) -> Result<&MovieDetails> {
        let target = target.trim();
        let movie = match target.parse::<usize>() {
            Ok(position) => position
                .checked_sub(1)
                .and_then(|index| self.visible(catalog).get(index).copied()),
            Err(_) => catalog.find(target),
        };

        let movie = movie.ok_or_else(|| CatalogError::NotFound {
            query: target.to_string(),
        })?;

        Ok(self.modal.insert(MovieDetails::from(movie)))
    }

    /// 關閉下載視窗；原本沒有開啟則回傳 false
    pub fn close(&mut self) -> bool {
        self.modal.take().is_some()
    }

    pub fn modal(&self) -> Option<&MovieDetails> {
        self.modal.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

/// 互動模式下的一行指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Category(Category),
    Search(String),
    Open(String),
    Close,
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "category" | "c" => Ok(BrowseCommand::Category(rest.parse()?)),
            // 不帶參數的 search 代表清除搜尋
            "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
            "open" | "o" if !rest.is_empty() => Ok(BrowseCommand::Open(rest.to_string())),
            "open" | "o" => Err(CatalogError::InvalidInput {
                message: "open needs a list number or IMDb id".to_string(),
            }),
            "close" => Ok(BrowseCommand::Close),
            "list" | "ls" | "" => Ok(BrowseCommand::List),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            other => Err(CatalogError::InvalidInput {
                message: format!("unknown command '{}', type 'help'", other),
            }),
        }
    }
}
