use std::fs;
use std::path::Path;

use genpdf::elements::{Break, FrameCellDecorator, LinearLayout, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Element, Margins, SimplePageDecorator};

use crate::error::Result;
use crate::menu::parse::MenuItem;

const MAIN_TITLE_COLOR: Color = Color::Rgb(52, 73, 94);
const SUBTITLE_COLOR: Color = Color::Rgb(127, 140, 141);
const DRINK_TITLE_COLOR: Color = Color::Rgb(44, 62, 80);
const BODY_COLOR: Color = Color::Rgb(85, 85, 85);

/// Headline configuration for the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    /// Main title printed at the top of the page.
    pub title: String,
    /// Optional smaller subtitle printed under the main title.
    pub subtitle: Option<String>,
}

/// Renders the parsed drinks as a single-column menu PDF: a centred
/// headline followed by one card per drink, separated by horizontal rules.
/// The font file is embedded into the document, so CJK menus render as long
/// as the font covers them.
pub fn render_menu(
    items: &[MenuItem],
    font_path: &Path,
    output: &Path,
    layout: &MenuLayout,
) -> Result<()> {
    let mut doc = Document::new(load_font_family(font_path)?);
    doc.set_title(layout.title.clone());
    doc.set_font_size(12);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(20.0, 15.0, 20.0, 15.0));
    doc.set_page_decorator(decorator);

    doc.push(
        Paragraph::new(layout.title.clone())
            .aligned(Alignment::Center)
            .styled(Style::new().with_font_size(28).with_color(MAIN_TITLE_COLOR)),
    );
    if let Some(subtitle) = &layout.subtitle {
        doc.push(
            Paragraph::new(subtitle.clone())
                .aligned(Alignment::Center)
                .styled(Style::new().with_font_size(14).with_color(SUBTITLE_COLOR)),
        );
    }
    doc.push(Break::new(1.0));

    let title_style = Style::new().with_font_size(16).with_color(DRINK_TITLE_COLOR);
    let body_style = Style::new().with_font_size(12).with_color(BODY_COLOR);

    let mut cards = TableLayout::new(vec![1]);
    cards.set_cell_decorator(FrameCellDecorator::new(true, false, false));

    for item in items {
        let mut card = LinearLayout::vertical();
        card.push(
            Paragraph::new(item.title.clone())
                .aligned(Alignment::Center)
                .styled(title_style.clone()),
        );
        card.push(Break::new(0.25));

        if let Some(recipe) = &item.recipe {
            card.push(
                Paragraph::new(recipe.clone())
                    .aligned(Alignment::Center)
                    .styled(body_style.clone()),
            );
        }
        if let Some(detail) = detail_line(item) {
            card.push(
                Paragraph::new(detail)
                    .aligned(Alignment::Center)
                    .styled(body_style.clone()),
            );
        }

        cards
            .row()
            .element(card.padded(Margins::trbl(4.0, 0.0, 4.0, 0.0)))
            .push()?;
    }
    doc.push(cards);

    doc.render_to_file(output)?;
    Ok(())
}

fn load_font_family(path: &Path) -> Result<FontFamily<FontData>> {
    let bytes = fs::read(path)?;
    let data = FontData::new(bytes, None)?;
    // A single TTF serves all four variants; the menu never uses synthetic
    // bold or italic text anyway.
    Ok(FontFamily {
        regular: data.clone(),
        bold: data.clone(),
        italic: data.clone(),
        bold_italic: data,
    })
}

fn detail_line(item: &MenuItem) -> Option<String> {
    let parts: Vec<&str> = item
        .base
        .iter()
        .chain(item.notes.iter())
        .map(String::as_str)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(base: Option<&str>, notes: Option<&str>) -> MenuItem {
        MenuItem {
            title: "Negroni".into(),
            base: base.map(Into::into),
            recipe: None,
            notes: notes.map(Into::into),
        }
    }

    #[test]
    fn detail_line_joins_base_and_notes() {
        assert_eq!(
            detail_line(&item(Some("Gin"), Some("bitter"))),
            Some("Gin · bitter".into())
        );
        assert_eq!(detail_line(&item(Some("Gin"), None)), Some("Gin".into()));
        assert_eq!(detail_line(&item(None, None)), None);
    }
}
