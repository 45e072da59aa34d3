//! Application launcher panel.
//!
//! Text front end for the capy-apps launcher engine: reads input events
//! from a line stream and draws the match list as text.

pub mod events;
pub mod input;
pub mod surface;

pub use input::LauncherInput;
pub use surface::TerminalSurface;
