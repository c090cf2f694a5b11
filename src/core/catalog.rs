use crate::core::filter::CatalogFilter;
use crate::domain::model::{Category, Movie, MovieDetails};

/// 補齊資料後的影片清單，保持目錄檔的順序
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Movie> {
        self.movies.iter().filter(|m| filter.matches(m)).collect()
    }

    pub fn find(&self, imdb_id: &str) -> Option<&Movie> {
        self.movies
            .iter()
            .find(|m| m.imdb_id.eq_ignore_ascii_case(imdb_id.trim()))
    }

    pub fn get(&self, id: usize) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn details(&self, imdb_id: &str) -> Option<MovieDetails> {
        self.find(imdb_id).map(MovieDetails::from)
    }
}

pub fn section_title(category: Category) -> String {
    match category {
        Category::All => format!("{} All Movies", category.icon()),
        other => format!("{} {} Movies", other.icon(), other.label()),
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 movie".to_string()
    } else {
        format!("{} movies", count)
    }
}
