//! The layout command tree.
//!
//! A tree is built once by the caller and then handed to the engine by
//! reference. Recursive variants own their children directly, so a finished
//! tree is plain data: it can be cloned, sent across threads when `E` allows
//! it, and laid out any number of times.

use serde::{Deserialize, Serialize};

/// One node of a layout description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command<E> {
    /// A single content unit to place.
    Element(E),
    /// A soft break: advances by one space, or starts a new row if the space does not fit.
    Line,
    /// An unconditional row break.
    HardLine,
    /// Every row opened while the child is processed starts one indent deeper.
    Indent(Box<Command<E>>),
    Concat(Vec<Command<E>>),
    /// Children in order with `separator` between consecutive ones only.
    Join {
        separator: Box<Command<E>>,
        children: Vec<Command<E>>,
    },
}

impl<E> Command<E> {
    pub fn element(element: E) -> Self {
        Command::Element(element)
    }

    pub fn line() -> Self {
        Command::Line
    }

    pub fn hard_line() -> Self {
        Command::HardLine
    }

    pub fn indent(child: Command<E>) -> Self {
        Command::Indent(Box::new(child))
    }

    pub fn concat(children: impl IntoIterator<Item = Command<E>>) -> Self {
        Command::Concat(children.into_iter().collect())
    }

    pub fn join(separator: Command<E>, children: impl IntoIterator<Item = Command<E>>) -> Self {
        Command::Join {
            separator: Box::new(separator),
            children: children.into_iter().collect(),
        }
    }

    /// Number of positioned elements a layout of this tree produces.
    pub fn element_count(&self) -> usize {
        match self {
            Command::Element(_) => 1,
            Command::Line | Command::HardLine => 0,
            Command::Indent(child) => child.element_count(),
            Command::Concat(children) => children.iter().map(Command::element_count).sum(),
            Command::Join {
                separator,
                children,
            } => {
                let gaps = children.len().saturating_sub(1);
                children.iter().map(Command::element_count).sum::<usize>()
                    + gaps * separator.element_count()
            }
        }
    }

    /// Returns `true` if laying out this tree never touches a leaf command.
    ///
    /// An empty tree lays out to zero rows.
    pub fn is_empty(&self) -> bool {
        match self {
            Command::Element(_) | Command::Line | Command::HardLine => false,
            Command::Indent(child) => child.is_empty(),
            Command::Concat(children) => children.iter().all(Command::is_empty),
            Command::Join {
                separator,
                children,
            } => {
                children.iter().all(Command::is_empty)
                    && (children.len() < 2 || separator.is_empty())
            }
        }
    }

    /// Converts every element while keeping the tree shape intact.
    pub fn map<U, F>(self, mut f: F) -> Command<U>
    where
        F: FnMut(E) -> U,
    {
        self.map_with(&mut f)
    }

    fn map_with<U, F>(self, f: &mut F) -> Command<U>
    where
        F: FnMut(E) -> U,
    {
        match self {
            Command::Element(element) => Command::Element(f(element)),
            Command::Line => Command::Line,
            Command::HardLine => Command::HardLine,
            Command::Indent(child) => Command::Indent(Box::new((*child).map_with(&mut *f))),
            Command::Concat(children) => {
                Command::Concat(children.into_iter().map(|c| c.map_with(&mut *f)).collect())
            }
            Command::Join {
                separator,
                children,
            } => Command::Join {
                separator: Box::new((*separator).map_with(&mut *f)),
                children: children.into_iter().map(|c| c.map_with(&mut *f)).collect(),
            },
        }
    }
}

impl<E> Default for Command<E> {
    /// The empty sequence.
    fn default() -> Self {
        Command::Concat(Vec::new())
    }
}
