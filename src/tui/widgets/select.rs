//! Category picker widget
//!
//! Selection is restricted to the five fixed categories and starts
//! unset; a form cannot be submitted until a category is chosen. The
//! unset state is an explicit `Option`, not a placeholder string.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Category;

/// A left/right cycling picker over the category set
#[derive(Debug, Clone, Default)]
pub struct CategorySelect {
    /// The chosen category, if any
    pub selected: Option<Category>,
    /// Whether the picker is focused
    pub focused: bool,
    /// Label rendered before the picker
    pub label: String,
}

impl CategorySelect {
    /// Create a new, unset picker
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Cycle to the next category
    pub fn next(&mut self) {
        self.selected = Some(match self.selected {
            None => Category::ALL[0],
            Some(current) => {
                let idx = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);
                Category::ALL[(idx + 1) % Category::ALL.len()]
            }
        });
    }

    /// Cycle to the previous category
    pub fn prev(&mut self) {
        self.selected = Some(match self.selected {
            None => Category::ALL[Category::ALL.len() - 1],
            Some(current) => {
                let idx = Category::ALL.iter().position(|c| *c == current).unwrap_or(0);
                Category::ALL[(idx + Category::ALL.len() - 1) % Category::ALL.len()]
            }
        });
    }

    /// Reset to the unset state
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Widget for &CategorySelect {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if !self.label.is_empty() {
            spans.push(Span::styled(
                self.label.as_str(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(": "));
        }

        let arrow_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled("< ", arrow_style));
        match self.selected {
            Some(category) => spans.push(Span::styled(
                category.as_str(),
                Style::default().fg(if self.focused {
                    Color::White
                } else {
                    Color::Gray
                }),
            )),
            None => spans.push(Span::styled(
                "Select category",
                Style::default().fg(Color::DarkGray),
            )),
        }
        spans.push(Span::styled(" >", arrow_style));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let select = CategorySelect::new();
        assert!(select.selected.is_none());
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut select = CategorySelect::new();
        let mut seen = Vec::new();
        for _ in 0..Category::ALL.len() {
            select.next();
            seen.push(select.selected.unwrap());
        }
        assert_eq!(seen, Category::ALL.to_vec());

        // wraps back to the first
        select.next();
        assert_eq!(select.selected, Some(Category::ALL[0]));
    }

    #[test]
    fn test_prev_from_unset_picks_last() {
        let mut select = CategorySelect::new();
        select.prev();
        assert_eq!(select.selected, Some(Category::Other));
    }

    #[test]
    fn test_clear_resets() {
        let mut select = CategorySelect::new();
        select.next();
        select.clear();
        assert!(select.selected.is_none());
    }
}
