pub mod frame;
pub mod span;
pub mod style;
pub mod theme;

pub use frame::{Frame, Line};
pub use span::Span;
pub use style::{Color, Style};
pub use theme::Theme;
