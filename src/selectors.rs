//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for `<img>` elements.
pub static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("valid img selector"));

/// Selector for `<picture>` elements.
pub static PICTURE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("picture").expect("valid picture selector"));

/// Selector for `<source>` children (scoped to a `<picture>` by the caller).
pub static SOURCE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("source").expect("valid source selector"));
