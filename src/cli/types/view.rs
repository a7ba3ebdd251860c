//! Display modes selectable on the command line.

use std::fmt;

/// How a season or race listing is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListView {
    /// One row per entry in a table
    List,
    /// A grid of cards, fewer per page
    #[default]
    Card,
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListView::List => "list",
            ListView::Card => "card",
        };
        write!(f, "{}", s)
    }
}

/// How race results are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResultsView {
    /// Results table
    #[default]
    List,
    /// Bar chart of finishing times
    Chart,
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultsView::List => "list",
            ResultsView::Chart => "chart",
        };
        write!(f, "{}", s)
    }
}
