//! Render-Layer: Szene → Zeichenbefehle.

pub mod curve_renderer;
mod egui_surface;
pub mod surface;

pub use egui_surface::EguiSurface;
pub use surface::DrawSurface;
