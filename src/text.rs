//! Terminal rendering of screen views, as plain text or one JSON document

use app_ui::components::RelatedListDescriptor;
use app_ui::DetailView;
use serde_json::{json, Value};
use std::fmt::Write;
use tmdb_client::MoviePage;

/// Render a detail view as text
pub fn detail(view: &DetailView) -> String {
    let mut out = String::new();
    match view {
        DetailView::Loading(placeholder) => {
            let _ = writeln!(out, "{}", placeholder.text);
        }
        DetailView::Failed(notice) => {
            let _ = writeln!(out, "Error: {}", notice.message);
        }
        DetailView::Detail(layout) => {
            let hero = &layout.hero;
            let _ = writeln!(out, "{}  \u{2605} {}", hero.title, hero.rating.text);
            if let Some(source) = &hero.source {
                let _ = writeln!(out, "[{:?}] {}", source.kind, source.image.uri);
            }
            let _ = writeln!(out);
            if !layout.overview.is_empty() {
                let _ = writeln!(out, "{}", layout.overview);
                let _ = writeln!(out);
            }
            for [left, right] in &layout.facts.rows {
                let _ = writeln!(
                    out,
                    "{:<20}{:<24}{:<20}{}",
                    format!("{}:", left.label),
                    left.value,
                    format!("{}:", right.label),
                    right.value
                );
            }
        }
    }
    out
}

/// Render one related list and the page fetched for it
pub fn related(descriptor: &RelatedListDescriptor, page: &MoviePage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", descriptor.title);
    if page.results.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for movie in &page.results {
        let _ = writeln!(out, "  {:>8}  {}", movie.id, movie.title);
    }
    out
}

/// The settled view and its related lists as one JSON document
///
/// A related list whose fetch failed carries a `null` page.
pub fn json_report(view: &DetailView, related: &[(RelatedListDescriptor, Option<MoviePage>)]) -> Value {
    let related: Vec<Value> = related
        .iter()
        .map(|(list, page)| json!({ "list": list, "page": page }))
        .collect();
    json!({ "view": view, "related": related })
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::components::{CoverType, LoadingPlaceholder};
    use app_ui::screens::movie_detail::render_state;
    use app_ui::FailurePresentation;
    use app_state::LoadState;
    use tmdb_client::{MovieRecord, MovieSummary};

    #[test]
    fn test_loading_text() {
        let view = DetailView::Loading(LoadingPlaceholder::default());
        assert_eq!(detail(&view), "Loading...\n");
    }

    #[test]
    fn test_detail_text() {
        let record = MovieRecord {
            id: 42,
            title: "The Answer".to_string(),
            overview: "Everything.".to_string(),
            backdrop_path: None,
            poster_path: Some("/p.jpg".to_string()),
            vote_average: 7.666,
            vote_count: 10,
            popularity: 1.0,
            original_language: "en".to_string(),
            release_date: None,
        };
        let view = render_state("42", &LoadState::Loaded(record), FailurePresentation::Placeholder);
        let text = detail(&view);

        assert!(text.starts_with("The Answer  \u{2605} 7.7\n"));
        assert!(text.contains("https://image.tmdb.org/t/p/w500/p.jpg"));
        assert!(text.contains("Vote Count:"));
    }

    #[test]
    fn test_related_text() {
        let descriptor = RelatedListDescriptor::new("Recommendations", "/movie/42/recommendations", CoverType::Poster);
        let page = MoviePage {
            page: 1,
            results: vec![MovieSummary {
                id: 7,
                title: "Seven".to_string(),
                poster_path: None,
                backdrop_path: None,
                vote_average: 8.0,
            }],
            total_pages: 1,
            total_results: 1,
        };
        let text = related(&descriptor, &page);
        assert!(text.contains("Recommendations"));
        assert!(text.contains("Seven"));
    }

    #[test]
    fn test_json_report_is_single_document() {
        let view = render_state("42", &LoadState::Failed, FailurePresentation::ErrorNotice);
        let descriptor = RelatedListDescriptor::new("Recommendations", "/movie/42/recommendations", CoverType::Poster);
        let report = json_report(&view, &[(descriptor, None)]);

        let text = serde_json::to_string_pretty(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["view"]["view"], "failed");
        assert_eq!(parsed["related"][0]["list"]["coverType"], "poster");
        assert!(parsed["related"][0]["page"].is_null());
    }

    #[test]
    fn test_json_report_without_related() {
        let view = DetailView::Loading(LoadingPlaceholder::default());
        let report = json_report(&view, &[]);
        assert_eq!(report["view"]["view"], "loading");
        assert_eq!(report["related"], serde_json::json!([]));
    }
}
