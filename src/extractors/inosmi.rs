//! inosmi.ru article extractor.
//!
//! Inosmi article pages carry the headline in `h1.article-header__title` and
//! the body as paragraphs inside `div.article__body`. Everything else on the
//! page (navigation, teasers, comment widgets) is ignored, so the score is
//! computed over editorial text only.

use super::Extract;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.article-header__title, h1").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.article__body p, div.article__text p, article p").unwrap()
});

/// Extractor for inosmi.ru article pages.
pub struct InosmiExtractor;

impl Extract for InosmiExtractor {
    fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut content = String::new();

        for element in document
            .select(&TITLE_SELECTOR)
            .chain(document.select(&BODY_SELECTOR))
        {
            let text = element.text().collect::<Vec<_>>().join(" ");
            let text = text.trim();
            if !text.is_empty() {
                content.push_str(text);
                content.push('\n');
            }
        }

        content
    }
}
