//! Concrete games driven by the search engine.

pub mod freecell;
