//! Section renderers for the Product Catalog page.

mod active_filters;
mod advisor;
mod filters;
mod grid;
mod header;

pub use active_filters::*;
pub use advisor::*;
pub use filters::*;
pub use grid::*;
pub use header::*;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
