//! Rendering hints: preload above-the-fold images and promote animated
//! elements to their own compositor layer.

#[cfg(test)]
#[path = "perf_hints_test.rs"]
mod perf_hints_test;

pub const EAGER_IMAGE_SELECTOR: &str = r#"img[loading="eager"]"#;
pub const ANIMATED_SELECTOR: &str = ".floating, .morphing, .pulse-glow";

/// Image URLs worth a preload link: non-empty, first occurrence only.
#[must_use]
pub fn preload_targets<I>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut targets: Vec<String> = Vec::new();
    for src in sources {
        if !src.trim().is_empty() && !targets.contains(&src) {
            targets.push(src);
        }
    }
    targets
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlImageElement;

    use super::{ANIMATED_SELECTOR, EAGER_IMAGE_SELECTOR, preload_targets};
    use crate::error::FxError;
    use crate::util::dom::{self, Page};

    pub fn init(page: &Page) -> Result<(), FxError> {
        let sources = page
            .query_all(EAGER_IMAGE_SELECTOR)?
            .iter()
            .filter_map(|img| img.dyn_ref::<HtmlImageElement>().map(HtmlImageElement::src))
            .collect::<Vec<_>>();
        let targets = preload_targets(sources);
        if !targets.is_empty() {
            let head = page.document.head().ok_or(FxError::Environment("head"))?;
            for href in &targets {
                let link = page.document.create_element("link")?;
                link.set_attribute("rel", "preload")?;
                link.set_attribute("as", "image")?;
                link.set_attribute("href", href)?;
                head.append_child(&link)?;
            }
        }

        for el in page.query_all(ANIMATED_SELECTOR)? {
            if let Some(html) = dom::as_html(&el) {
                dom::set_style(&html, "will-change", "transform")?;
            }
        }
        Ok(())
    }
}
