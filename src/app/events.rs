//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

/// Zeigegeräte-Taste, toolkit-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primäre Taste (links) — einzige Taste, die Selektion auslöst
    Primary,
    /// Sekundäre Taste (rechts)
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Die Pointer-Varianten bilden die Zustandsmaschine der Selektion ab;
/// Positionen sind in Zeichenflächen-Koordinaten (Pixel, Ursprung links oben).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Taste gedrückt an Position
    PointerPressed { pos: Vec2, button: PointerButton },
    /// Taste losgelassen (Position ist für das Loslassen irrelevant)
    PointerReleased { button: PointerButton },
    /// Bewegung mit gehaltener Primärtaste
    PointerDragged { pos: Vec2 },
    /// Bewegung ohne gehaltene Taste (Hover-Feedback)
    PointerMoved { pos: Vec2 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, ausgeführt vom Controller auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt als Drag-Ziel selektieren
    SelectControlPoint { index: usize },
    /// Selektion aufheben
    ClearSelection,
    /// Selektierten Punkt auf neue Position setzen
    MoveSelectedPoint { pos: Vec2 },
    /// Hover-Zustand für Cursor-Feedback setzen
    SetHoveredPoint { index: Option<usize> },
    /// Viewport-Größe übernehmen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung kontrolliert beenden
    RequestExit,
}
