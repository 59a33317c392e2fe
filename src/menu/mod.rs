use std::fs;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::Result;

pub mod parse;
pub mod pdf;

pub use parse::MenuItem;
pub use pdf::MenuLayout;

/// Parses a Markdown drinks list and renders it as a printable PDF menu.
/// Returns the number of drinks that made it onto the menu.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn markdown_to_pdf(
    input: &Path,
    output: &Path,
    font: &Path,
    layout: &MenuLayout,
) -> Result<usize> {
    let source = fs::read_to_string(input)?;
    let items = parse::parse_menu(&source)?;
    if items.is_empty() {
        warn!("no drink sections found in menu source");
    } else {
        info!(item_count = items.len(), "parsed drinks from menu source");
    }

    pdf::render_menu(&items, font, output, layout)?;
    info!(path = %output.display(), "menu PDF written");
    Ok(items.len())
}
