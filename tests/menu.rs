use std::fs;

use barback_tools::menu::{self, MenuLayout, parse};
use tempfile::tempdir;

fn layout() -> MenuLayout {
    MenuLayout {
        title: "Signature Cocktails".into(),
        subtitle: Some("精选酒单".into()),
    }
}

#[test]
fn menu_sections_survive_a_file_roundtrip() {
    let dir = tempdir().expect("temporary directory");
    let menu_path = dir.path().join("menu.md");
    fs::write(
        &menu_path,
        "### 金汤力 Gin & Tonic\n\n*   **配方**：金酒 45ml、汤力水补满\n\n### Negroni\n\n*   **Recipe**: Gin, Campari, sweet vermouth\n",
    )
    .expect("menu written");

    let source = fs::read_to_string(&menu_path).expect("menu read");
    let items = parse::parse_menu(&source).expect("menu parsed");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].recipe.as_deref(), Some("金酒 45ml、汤力水补满"));
    assert_eq!(items[1].title, "Negroni");
}

#[test]
fn rendering_rejects_an_invalid_font_file() {
    let dir = tempdir().expect("temporary directory");

    let menu_path = dir.path().join("menu.md");
    fs::write(&menu_path, "### Negroni\n\n*   **Recipe**: Gin, Campari\n").expect("menu written");

    let font_path = dir.path().join("bogus.ttf");
    fs::write(&font_path, b"this is not a font").expect("font written");

    let output = dir.path().join("menu.pdf");
    let result = menu::markdown_to_pdf(&menu_path, &output, &font_path, &layout());
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn a_missing_menu_source_is_an_error() {
    let dir = tempdir().expect("temporary directory");
    let result = menu::markdown_to_pdf(
        &dir.path().join("missing.md"),
        &dir.path().join("menu.pdf"),
        &dir.path().join("font.ttf"),
        &layout(),
    );
    assert!(result.is_err());
}
