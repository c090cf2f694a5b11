//! 終端機輸出：影片卡片、列表、下載視窗。

use std::fmt::Write;

use crate::core::catalog::{count_label, section_title, Catalog};
use crate::core::filter::CatalogFilter;
use crate::domain::model::{known, Category, Movie, MovieDetails};
use crate::utils::error::Result;

const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";

pub fn render_header(catalog: &Catalog) -> String {
    format!(
        "🎬 Movie Catalog | {}+ Movies | 4K Quality | Free\n",
        catalog.len()
    )
}

pub fn render_categories(selected: Category) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let marker = if category == selected { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {} {:<10} ({})",
            marker,
            category.icon(),
            category.label(),
            category.id()
        );
    }
    out
}

/// 一張影片卡片，`position` 是目前列表中的編號
pub fn render_card(position: usize, movie: &Movie) -> String {
    let metadata = &movie.metadata;
    let quality = if movie.quality.trim().is_empty() {
        "HD"
    } else {
        movie.quality.as_str()
    };

    let mut line = format!("{:>3}. {} ({})", position, movie.title(), movie.year());
    if let Some(country) = known(&metadata.country) {
        let first = country.split(',').next().unwrap_or(country).trim();
        let _ = write!(line, " · {}", first);
    }
    let _ = write!(line, " [{}]", quality);

    let mut badges = Vec::new();
    if let Some(rating) = known(&metadata.imdb_rating) {
        badges.push(format!("⭐ {}", rating));
    }
    if let Some(rated) = known(&metadata.rated) {
        badges.push(rated.to_string());
    }
    if metadata.is_series() {
        if let Some(seasons) = known(&metadata.total_seasons) {
            badges.push(format!("📺 {} Seasons", seasons));
        }
    }
    if let Some(metascore) = known(&metadata.metascore) {
        badges.push(format!("Meta {}", metascore));
    }
    if let Some(tomatoes) = metadata.rating_from(ROTTEN_TOMATOES) {
        badges.push(format!("🍅 {}", tomatoes));
    }

    let mut out = line;
    if !badges.is_empty() {
        let _ = write!(out, "\n     {}", badges.join("  "));
    }

    let extras: Vec<&str> = [&metadata.genre, &metadata.runtime, &metadata.language]
        .into_iter()
        .filter_map(known)
        .collect();
    if !extras.is_empty() {
        let _ = write!(out, "\n     {}", extras.join(" | "));
    }
    if let Some(awards) = known(&metadata.awards) {
        let _ = write!(out, "\n     🏆 {}", awards);
    }
    out.push('\n');
    out
}

pub fn render_listing(movies: &[&Movie], filter: &CatalogFilter) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", section_title(filter.category));
    if filter.is_searching() {
        let _ = write!(out, " matching \"{}\"", filter.query);
    }
    let _ = writeln!(out, " | {}", count_label(movies.len()));
    out.push('\n');

    if movies.is_empty() {
        out.push_str("🎬 No movies found\n");
        out.push_str("Try adjusting your search or filter\n");
        return out;
    }

    for (index, movie) in movies.iter().enumerate() {
        out.push_str(&render_card(index + 1, movie));
    }
    out
}

/// 下載視窗內容
pub fn render_details(details: &MovieDetails) -> String {
    let metadata = &details.metadata;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", metadata.title, metadata.year);
    if metadata.kind.is_some() {
        let kind = if metadata.is_series() {
            "📺 Series"
        } else {
            "🎬 Movie"
        };
        let _ = writeln!(out, "{}", kind);
    }

    let headline: Vec<&str> = [&metadata.rated, &metadata.runtime]
        .into_iter()
        .filter_map(known)
        .collect();
    if !headline.is_empty() {
        let _ = writeln!(out, "{}", headline.join(" | "));
    }

    let mut ratings = Vec::new();
    if let Some(rating) = known(&metadata.imdb_rating) {
        match known(&metadata.imdb_votes) {
            Some(votes) => ratings.push(format!("⭐ IMDb {}/10 ({} votes)", rating, votes)),
            None => ratings.push(format!("⭐ IMDb {}/10", rating)),
        }
    }
    if let Some(metascore) = known(&metadata.metascore) {
        ratings.push(format!("Metascore {}", metascore));
    }
    if let Some(tomatoes) = metadata.rating_from(ROTTEN_TOMATOES) {
        ratings.push(format!("🍅 {}", tomatoes));
    }
    if !ratings.is_empty() {
        let _ = writeln!(out, "{}", ratings.join("  "));
    }

    if let Some(plot) = known(&metadata.plot) {
        let _ = writeln!(out, "\nSynopsis\n  {}", plot);
    }

    let mut rows: Vec<(&str, &str)> = [
        ("Genre", &metadata.genre),
        ("Released", &metadata.released),
        ("Director", &metadata.director),
        ("Writer", &metadata.writer),
        ("Cast", &metadata.actors),
        ("Language", &metadata.language),
        ("Country", &metadata.country),
    ]
    .into_iter()
    .filter_map(|(label, value)| known(value).map(|v| (label, v)))
    .collect();
    if metadata.is_series() {
        if let Some(seasons) = known(&metadata.total_seasons) {
            rows.push(("Seasons", seasons));
        }
    }
    for (label, value) in [
        ("Box Office", &metadata.box_office),
        ("Production", &metadata.production),
    ] {
        if let Some(v) = known(value) {
            rows.push((label, v));
        }
    }
    if !rows.is_empty() {
        out.push('\n');
        for (label, value) in rows {
            let _ = writeln!(out, "  {:<11} {}", label, value);
        }
    }

    if let Some(awards) = known(&metadata.awards) {
        let _ = writeln!(out, "\n🏆 {}", awards);
    }

    out.push_str("\nDownload links\n");
    if details.links.is_empty() {
        out.push_str("  No download links available\n");
    } else {
        out.push_str("  Select your preferred quality:\n");
        for (index, link) in details.links.iter().enumerate() {
            let _ = writeln!(out, "  {}. {:<6} {}", index + 1, link.quality, link.url);
        }
    }
    out.push_str("\n⚠️ Please ensure you have rights to download this content\n");
    out
}

pub fn listing_json(movies: &[&Movie], filter: &CatalogFilter) -> Result<String> {
    let body = serde_json::json!({
        "filter": filter,
        "count": movies.len(),
        "movies": movies,
    });
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn details_json(details: &MovieDetails) -> Result<String> {
    Ok(serde_json::to_string_pretty(details)?)
}

pub fn categories_json() -> Result<String> {
    let categories: Vec<_> = Category::ALL
        .iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id(),
                "label": c.label(),
                "icon": c.icon(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&categories)?)
}
