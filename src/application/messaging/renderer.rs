//! Article renderer - Formats movie metadata into a blog post

use crate::domain::entities::{ArticlePayload, MovieMetadata};

/// Builds the HTML article for a movie.
///
/// Pure string interpolation: metadata is inserted verbatim, nothing is
/// escaped.
pub struct ArticleRenderer;

impl ArticleRenderer {
    pub fn render(movie: &MovieMetadata, short_link: &str, category: &str, remark: &str) -> ArticlePayload {
        ArticlePayload {
            title: format!("Movie: {}", movie.title),
            content: Self::render_html(movie, short_link, category, remark),
            labels: vec![category.to_string()],
        }
    }

    fn render_html(movie: &MovieMetadata, short_link: &str, category: &str, remark: &str) -> String {
        format!(
            r##"
    <div style="color:#fff;background:#000;padding:15px;font-family:sans-serif">
        <h2 style="text-align:center;color:#f4c430">{title}</h2>
        <div style="text-align:center"><img src="{poster}" style="max-width:300px;border-radius:8px"/></div>
        <p>{plot}</p>
        <p><strong>Rating:</strong> {rating}</p>
        <p><strong>Genre:</strong> {genre}</p>
        <p><strong>Director:</strong> {director}</p>
        <p><strong>Download:</strong><br><textarea readonly style="width:90%">{short_link}</textarea></p>
        <p><strong>Category:</strong> {category}</p>
        <p><strong>Remark:</strong> {remark}</p>
    </div>
    "##,
            title = movie.title,
            poster = movie.poster,
            plot = movie.plot,
            rating = movie.rating,
            genre = movie.genre,
            director = movie.director,
        )
    }
}
