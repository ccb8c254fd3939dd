//! Output types from the layout engine.
//!
//! A [`LayoutResult`] is an ordered list of [`Row`]s, each holding the
//! elements placed on it with their horizontal offsets. Vertical placement is
//! left to the renderer; [`LayoutResult::placements`] covers the common case of
//! a fixed line height.

use serde::Serialize;
use trellis_types::Measurable;

/// One content unit placed on a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedElement<E> {
    pub element: E,
    /// Horizontal offset from the start of the row.
    pub x: f32,
}

/// One output line. May be empty, e.g. between two consecutive hard breaks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row<E> {
    pub(crate) elements: Vec<PositionedElement<E>>,
}

impl<E> Row<E> {
    pub(crate) fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[PositionedElement<E>] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<PositionedElement<E>> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionedElement<E>> {
        self.elements.iter()
    }
}

impl<E: Measurable> Row<E> {
    /// Right edge of the last element, or `0.0` for an empty row.
    pub fn extent(&self) -> f32 {
        self.elements
            .last()
            .map_or(0.0, |last| last.x + last.element.width())
    }
}

impl<'a, E> IntoIterator for &'a Row<E> {
    type Item = &'a PositionedElement<E>;
    type IntoIter = std::slice::Iter<'a, PositionedElement<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// An element with both coordinates resolved for a fixed line height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a, E> {
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub element: &'a E,
}

/// The rows produced by one layout pass, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutResult<E> {
    pub(crate) rows: Vec<Row<E>>,
}

impl<E> LayoutResult<E> {
    pub fn rows(&self) -> &[Row<E>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row<E>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All placed elements in document order, row by row.
    pub fn elements(&self) -> impl Iterator<Item = &PositionedElement<E>> + '_ {
        self.rows.iter().flat_map(|row| row.elements.iter())
    }

    /// Resolves every element to `(x, row * line_height)`.
    pub fn placements(&self, line_height: f32) -> impl Iterator<Item = Placement<'_, E>> + '_ {
        self.rows.iter().enumerate().flat_map(move |(index, row)| {
            let y = index as f32 * line_height;
            row.elements.iter().map(move |positioned| Placement {
                row: index,
                x: positioned.x,
                y,
                element: &positioned.element,
            })
        })
    }
}
