//! The eight fixed winning lines.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the 8 triples of cells that wins when owned by a single mark.
///
/// Variants are declared in scan order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals. The serialized form is the strike
/// identifier the presentation layer draws through the line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinLine {
    /// Cells 0, 1, 2.
    #[serde(rename = "strike-row-1")]
    TopRow,
    /// Cells 3, 4, 5.
    #[serde(rename = "strike-row-2")]
    MiddleRow,
    /// Cells 6, 7, 8.
    #[serde(rename = "strike-row-3")]
    BottomRow,
    /// Cells 0, 3, 6.
    #[serde(rename = "strike-column-1")]
    LeftColumn,
    /// Cells 1, 4, 7.
    #[serde(rename = "strike-column-2")]
    CenterColumn,
    /// Cells 2, 5, 8.
    #[serde(rename = "strike-column-3")]
    RightColumn,
    /// Cells 0, 4, 8.
    #[serde(rename = "strike-diagonal-1")]
    MainDiagonal,
    /// Cells 2, 4, 6.
    #[serde(rename = "strike-diagonal-2")]
    AntiDiagonal,
}

impl WinLine {
    /// All lines in scan order.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three cells of this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Display identifier used when drawing the strike through the line.
    pub fn strike_class(self) -> &'static str {
        match self {
            WinLine::TopRow => "strike-row-1",
            WinLine::MiddleRow => "strike-row-2",
            WinLine::BottomRow => "strike-row-3",
            WinLine::LeftColumn => "strike-column-1",
            WinLine::CenterColumn => "strike-column-2",
            WinLine::RightColumn => "strike-column-3",
            WinLine::MainDiagonal => "strike-diagonal-1",
            WinLine::AntiDiagonal => "strike-diagonal-2",
        }
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.strike_class())
    }
}
