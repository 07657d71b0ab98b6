pub mod diagram;
pub mod hover;
pub mod layout;
pub mod options;
pub mod pick;
pub mod svg;

pub use diagram::{hover_dot_command, render_diagram};
pub use hover::HoverTracker;
pub use layout::{DiagramState, Layout};
pub use options::{DiagramOptions, OptionsError};
pub use pick::closest_fret_coord;
pub use svg::render_svg;
