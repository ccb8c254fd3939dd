//! The row layout engine.
//!
//! Layout is a single depth-first walk over a [`Command`] tree. The walk keeps
//! a small cursor (finished rows, the open row, the current offset and the
//! indent depth) that lives only for the duration of one call.
//!
//! Wrapping uses `>=` against the maximum width for both soft breaks and
//! elements: a unit that would end exactly on the boundary still moves to a
//! new row first. Elements are never split, so an element wider than the row
//! simply overflows the row it lands on. Zero-width elements never wrap.

use crate::output::{LayoutResult, PositionedElement, Row};
use crate::{Command, LayoutConfig, LayoutError};
use trellis_types::Measurable;

/// A validated layout configuration ready to lay out any number of trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `tree` into rows.
    ///
    /// The tree is only borrowed; placed elements are clones of its leaves.
    pub fn layout<E>(&self, tree: &Command<E>) -> Result<LayoutResult<E>, LayoutError>
    where
        E: Measurable + Clone,
    {
        let mut cursor = Cursor::new(&self.config);
        cursor.process(tree)?;
        let rows = cursor.finish();

        log::debug!(
            "Laid out {} elements into {} rows (max width {:.2}).",
            rows.iter().map(Row::len).sum::<usize>(),
            rows.len(),
            self.config.max_width
        );
        Ok(LayoutResult { rows })
    }
}

/// Validates `config` and lays out `tree` in one step.
pub fn layout<E>(tree: &Command<E>, config: &LayoutConfig) -> Result<LayoutResult<E>, LayoutError>
where
    E: Measurable + Clone,
{
    LayoutEngine::new(*config)?.layout(tree)
}

struct Cursor<'c, E> {
    config: &'c LayoutConfig,
    rows: Vec<Row<E>>,
    current_row: Row<E>,
    current_offset: f32,
    indent_level: usize,
    /// Document-order index of the next element, for error reporting.
    next_index: usize,
}

impl<'c, E: Measurable + Clone> Cursor<'c, E> {
    fn new(config: &'c LayoutConfig) -> Self {
        Self {
            config,
            rows: Vec::new(),
            current_row: Row::new(),
            current_offset: 0.0,
            indent_level: 0,
            next_index: 0,
        }
    }

    fn process(&mut self, command: &Command<E>) -> Result<(), LayoutError> {
        match command {
            Command::Element(element) => self.place(element),
            Command::Line => {
                if self.current_offset + self.config.space_width >= self.config.max_width {
                    log::trace!("Soft break wraps at offset {:.2}.", self.current_offset);
                    self.move_to_next_row();
                } else {
                    self.current_offset += self.config.space_width;
                }
                Ok(())
            }
            Command::HardLine => {
                self.move_to_next_row();
                Ok(())
            }
            Command::Indent(child) => {
                self.indent_level += 1;
                let result = self.process(child);
                self.indent_level -= 1;
                result
            }
            Command::Concat(children) => {
                for child in children {
                    self.process(child)?;
                }
                Ok(())
            }
            Command::Join {
                separator,
                children,
            } => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        self.process(separator)?;
                    }
                    self.process(child)?;
                }
                Ok(())
            }
        }
    }

    fn place(&mut self, element: &E) -> Result<(), LayoutError> {
        let index = self.next_index;
        self.next_index += 1;

        let width = element.width();
        if !(width.is_finite() && width >= 0.0) {
            return Err(LayoutError::InvalidElementWidth { index, width });
        }

        // Zero-width units never wrap, even on a row that already overflowed.
        if width > 0.0 && self.current_offset + width >= self.config.max_width {
            log::trace!(
                "Element #{} (width {:.2}) wraps at offset {:.2}.",
                index,
                width,
                self.current_offset
            );
            self.move_to_next_row();
        }

        self.current_row.elements.push(PositionedElement {
            element: element.clone(),
            x: self.current_offset,
        });
        self.current_offset += width;
        Ok(())
    }

    /// Closes the open row, even when empty, and starts the next one at the live indent.
    fn move_to_next_row(&mut self) {
        let finished = std::mem::replace(&mut self.current_row, Row::new());
        self.rows.push(finished);
        self.current_offset = self.indent_level as f32 * self.config.indent_width;
    }

    fn finish(mut self) -> Vec<Row<E>> {
        if !self.current_row.is_empty() {
            self.rows.push(self.current_row);
        }
        self.rows
    }
}
