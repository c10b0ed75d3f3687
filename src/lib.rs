//! Bézier-Kurven-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PointerButton, SelectionState, ViewState,
};
pub use core::{casteljau_point, sample_segment, CurveChain, POINTS_PER_SEGMENT};
pub use render::{DrawSurface, EguiSurface};
pub use shared::{EditorOptions, RenderScene};
