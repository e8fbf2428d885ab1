//! The fixed option menu: keys, labels and argument prompts.

use std::io::{self, Write};

/// Width of the separator line printed around the menu.
const SEPARATOR_WIDTH: usize = 57;

/// One entry of the option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    InsertVertex,
    InsertEdge,
    Size,
    ShowAdjacency,
    RemoveVertex,
    RemoveEdge,
    ClearAll,
    BreadthFirst,
    DepthFirst,
    ExportDot,
    Quit,
}

impl MenuOption {
    /// All options in menu order.
    pub const ALL: [MenuOption; 11] = [
        Self::InsertVertex,
        Self::InsertEdge,
        Self::Size,
        Self::ShowAdjacency,
        Self::RemoveVertex,
        Self::RemoveEdge,
        Self::ClearAll,
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::ExportDot,
        Self::Quit,
    ];

    /// Parse a menu key. Keys are case-sensitive.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::InsertVertex),
            '2' => Some(Self::InsertEdge),
            '3' => Some(Self::Size),
            '4' => Some(Self::ShowAdjacency),
            '5' => Some(Self::RemoveVertex),
            '6' => Some(Self::RemoveEdge),
            '7' => Some(Self::ClearAll),
            '8' => Some(Self::BreadthFirst),
            '9' => Some(Self::DepthFirst),
            'A' => Some(Self::ExportDot),
            'X' => Some(Self::Quit),
            _ => None,
        }
    }

    /// The key that selects this option.
    pub fn key(&self) -> char {
        match self {
            Self::InsertVertex => '1',
            Self::InsertEdge => '2',
            Self::Size => '3',
            Self::ShowAdjacency => '4',
            Self::RemoveVertex => '5',
            Self::RemoveEdge => '6',
            Self::ClearAll => '7',
            Self::BreadthFirst => '8',
            Self::DepthFirst => '9',
            Self::ExportDot => 'A',
            Self::Quit => 'X',
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InsertVertex => "Insert vertex",
            Self::InsertEdge => "Insert edge",
            Self::Size => "Get size",
            Self::ShowAdjacency => "Show adjacency list",
            Self::RemoveVertex => "Remove vertex",
            Self::RemoveEdge => "Remove edge",
            Self::ClearAll => "Clear all",
            Self::BreadthFirst => "Breadth-first traversal",
            Self::DepthFirst => "Depth-first traversal",
            Self::ExportDot => "Export DOT file",
            Self::Quit => "Quit",
        }
    }

    /// Prompts for the vertex identifiers this option needs, in order.
    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            Self::InsertVertex => &["Enter the vertex ID (A-Z): "],
            Self::RemoveVertex => &["Enter the ID of the vertex to remove (A-Z): "],
            Self::InsertEdge | Self::RemoveEdge => &[
                "Enter the source vertex ID (A-Z): ",
                "Enter the destination vertex ID (A-Z): ",
            ],
            Self::BreadthFirst => {
                &["Enter the start vertex ID for the breadth-first traversal (A-Z): "]
            }
            Self::DepthFirst => &["Enter the start vertex ID for the depth-first traversal (A-Z): "],
            Self::Size | Self::ShowAdjacency | Self::ClearAll | Self::ExportDot | Self::Quit => &[],
        }
    }
}

/// Print the separator line.
pub fn write_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))
}

/// Print the full option menu followed by the selection prompt.
pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    write_separator(out)?;
    for option in MenuOption::ALL {
        writeln!(out, "{}. {}", option.key(), option.label())?;
    }
    write!(out, "Select an option: ")?;
    out.flush()
}
