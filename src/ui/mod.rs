//! UI-Komponenten: Input-Handling und Status-Bar (egui).

pub mod input;
pub mod status;

pub use input::InputState;
pub use status::render_status_bar;
