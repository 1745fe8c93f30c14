// Engine module - region navigation, layout and chart models
// Pure logic between wire types (types) and presentation (cli); no I/O here

pub mod charts;
pub mod controller;
pub mod debounce;
pub mod label;
pub mod layout;
pub mod palette;
pub mod sequence;
pub mod session;
pub mod summary;
pub mod tree;

pub use charts::{
    ChartSlot, ConcentrationChart, ProgressBar, StackedColumnChart, StackedPercentChart, Upsert,
    ZeroLabels,
};
pub use controller::{
    ChildRef, DrillDownController, NavigationError, RenderSurface, ViewState, Viewport,
};
pub use debounce::{Debouncer, RESIZE_DEBOUNCE};
pub use label::{DistrictLabel, display_name, format_name_with_line_break};
pub use layout::{LayoutRect, PADDING_INNER, squarify, tile};
pub use palette::{RegionColors, parse_hex_color};
pub use sequence::{RequestSequence, Ticket};
pub use session::{
    Activation, Applied, MemberPopup, MemberRequest, Notice, TreeRequest, TreemapSession,
};
pub use summary::{SummaryCard, SummaryView};
pub use tree::{NodeId, RegionTree, TreeNode};
