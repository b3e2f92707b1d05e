//! Menu overlay helper
//!
//! A vertical text menu rendered through label overlay entities. The menu
//! owns selection state only; push the entities it produces onto a scene's
//! overlay stack and rebuild them when the selection moves.

use glam::Vec2;

use crate::backend::{Color, TextStyle};
use crate::sim::entity::Entity;

/// One selectable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
}

/// Colors and layout for menu rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuStyle {
    pub normal: Color,
    pub selected: Color,
    /// Vertical distance between rows
    pub line_height: f32,
    /// Glyph height passed through to the text style
    pub px: f32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            normal: Color::rgb(220, 220, 220),
            selected: Color::rgb(255, 255, 0),
            line_height: 28.0,
            px: 16.0,
        }
    }
}

/// A selectable text menu
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
    pos: Vec2,
    style: MenuStyle,
    selected: usize,
}

impl Menu {
    pub fn new<I, S>(labels: I, pos: Vec2, style: MenuStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels
                .into_iter()
                .map(|label| MenuItem {
                    label: label.into(),
                })
                .collect(),
            pos,
            style,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.items.get(self.selected).map(|item| item.label.as_str())
    }

    /// Move the selection up, wrapping at the top
    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    /// Move the selection down, wrapping at the bottom
    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    /// Label entities for the overlay stack, one per row top to bottom,
    /// with the selected row in the selected color
    pub fn entities(&self) -> Vec<Entity> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let color = if i == self.selected {
                    self.style.selected
                } else {
                    self.style.normal
                };
                Entity::label(
                    self.pos + Vec2::new(0.0, i as f32 * self.style.line_height),
                    item.label.clone(),
                    TextStyle {
                        color,
                        px: self.style.px,
                    },
                )
            })
            .collect()
    }
}
