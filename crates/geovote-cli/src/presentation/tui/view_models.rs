//! Screen data for the treemap browser. Everything here is plain data so
//! views stay dumb and the surface can be asserted on directly in tests.

/// One tile of the subdivision view, in body-relative cell coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CellViewModel {
    pub name: String,
    /// Label split at the administrative suffix; one entry per line.
    pub label_lines: Vec<String>,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub fill: (u8, u8, u8),
    pub label_color: (u8, u8, u8),
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    pub district_name: String,
    pub member_name: Option<String>,
    pub party: Option<String>,
    pub color: (u8, u8, u8),
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BodyViewModel {
    /// Nothing has been rendered yet.
    #[default]
    Loading,
    Treemap(Vec<CellViewModel>),
    Cards(Vec<CardViewModel>),
    Empty(String),
}

impl BodyViewModel {
    /// Number of focusable items.
    pub fn item_count(&self) -> usize {
        match self {
            BodyViewModel::Treemap(cells) => cells.len(),
            BodyViewModel::Cards(cards) => cards.len(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupViewModel {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenViewModel {
    pub breadcrumb: Vec<String>,
    pub back_enabled: bool,
    pub age: Option<u32>,
    pub body: BodyViewModel,
    pub focus: Option<usize>,
    pub popup: Option<PopupViewModel>,
    pub notice: Option<String>,
    pub loading: bool,
    pub logs: Vec<String>,
}
