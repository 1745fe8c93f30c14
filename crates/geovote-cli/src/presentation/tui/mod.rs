//! Interactive treemap browser.
//!
//! ```text
//! [ TreemapSession ] --render--> [ TuiSurface ] --> [ ScreenViewModel ] --> [ Views ]
//!        ^                                                                      |
//!        +------------------ key / resize events <-- [ TuiRenderer ] <----------+
//! ```

pub mod renderer;
pub mod surface;
pub mod view_models;
pub mod views;

pub use renderer::{TuiApp, TuiRenderer};
pub use surface::TuiSurface;
pub use view_models::{
    BodyViewModel, CardViewModel, CellViewModel, PopupViewModel, ScreenViewModel,
};
pub use views::body_viewport;
