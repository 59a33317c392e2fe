use regex::Regex;

use crate::error::Result;

/// One drink extracted from the Markdown menu source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Drink name, taken from the `###` heading line.
    pub title: String,
    /// Base spirit, from a `**基酒**`/`**Base**` bullet.
    pub base: Option<String>,
    /// Ingredient list, from a `**配方**`/`**Recipe**` bullet.
    pub recipe: Option<String>,
    /// Tasting notes, from a `**口感**`/`**Notes**` bullet.
    pub notes: Option<String>,
}

/// Splits the menu source on `###` headings and extracts the labelled
/// detail bullets of each section. Labels are accepted in Chinese or
/// English, followed by an ASCII or full-width colon. Sections keep their
/// source order; missing details stay `None`.
pub fn parse_menu(source: &str) -> Result<Vec<MenuItem>> {
    let heading = Regex::new(r"(?m)^###\s+")?;
    let base = Regex::new(r"^\*\s*\*\*(?:基酒|Base)\*\*[：:]\s*(.+)")?;
    let recipe = Regex::new(r"^\*\s*\*\*(?:配方|Recipe)\*\*[：:]\s*(.+)")?;
    let notes = Regex::new(r"^\*\s*\*\*(?:口感|Notes)\*\*[：:]\s*(.+)")?;

    let mut items = Vec::new();

    for section in heading.split(source) {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        let mut lines = section.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();

        let mut item = MenuItem {
            title,
            base: None,
            recipe: None,
            notes: None,
        };

        for line in lines {
            let line = line.trim();
            if let Some(captures) = base.captures(line) {
                item.base = Some(captures[1].trim().to_string());
            } else if let Some(captures) = recipe.captures(line) {
                item.recipe = Some(captures[1].trim().to_string());
            } else if let Some(captures) = notes.captures(line) {
                item.notes = Some(captures[1].trim().to_string());
            }
        }

        items.push(item);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = "\
### 金汤力 Gin & Tonic

*   **基酒**：金酒
*   **配方**：金酒 45ml、汤力水补满、青柠角
*   **口感**：清爽、微苦

### Negroni

*   **Base**: Gin
*   **Recipe**: Gin 30ml, Campari 30ml, sweet vermouth 30ml
";

    #[test]
    fn sections_become_menu_items_in_order() {
        let items = parse_menu(MENU).expect("menu parsed");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "金汤力 Gin & Tonic");
        assert_eq!(items[1].title, "Negroni");
    }

    #[test]
    fn chinese_labels_with_fullwidth_colons_are_extracted() {
        let items = parse_menu(MENU).expect("menu parsed");
        assert_eq!(items[0].base.as_deref(), Some("金酒"));
        assert_eq!(
            items[0].recipe.as_deref(),
            Some("金酒 45ml、汤力水补满、青柠角")
        );
        assert_eq!(items[0].notes.as_deref(), Some("清爽、微苦"));
    }

    #[test]
    fn english_labels_with_ascii_colons_are_extracted() {
        let items = parse_menu(MENU).expect("menu parsed");
        assert_eq!(items[1].base.as_deref(), Some("Gin"));
        assert_eq!(
            items[1].recipe.as_deref(),
            Some("Gin 30ml, Campari 30ml, sweet vermouth 30ml")
        );
        assert_eq!(items[1].notes, None);
    }

    #[test]
    fn a_section_without_detail_bullets_keeps_only_its_title() {
        let items = parse_menu("### Martini\n\nStirred, never shaken.\n").expect("menu parsed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Martini");
        assert_eq!(items[0].recipe, None);
    }

    #[test]
    fn empty_input_yields_no_items() {
        let items = parse_menu("").expect("menu parsed");
        assert!(items.is_empty());
    }
}
