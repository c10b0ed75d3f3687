//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::CurveChain;
use crate::shared::EditorOptions;

/// Auswahlbezogener Anwendungszustand.
///
/// Höchstens ein Punkt wird gleichzeitig gezogen: `None` = Idle,
/// `Some(i)` = Dragging(i). Transient, wird nicht persistiert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index des aktuell gezogenen Kontrollpunkts
    pub dragged_point: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand (Idle).
    pub fn new() -> Self {
        Self {
            dragged_point: None,
        }
    }

    /// Gibt `true` zurück, wenn gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragged_point.is_some()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Punkt unter dem Cursor (steuert das Greif-Cursor-Feedback)
    pub hovered_point: Option<usize>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            hovered_point: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die Kontrollpunkt-Kette (lebt für die Prozess-Lebensdauer)
    pub curve: CurveChain,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Abtastung)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit der Standard-Kurve.
    pub fn new() -> Self {
        Self {
            curve: CurveChain::default(),
            selection: SelectionState::new(),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.curve.point_count()
    }

    /// Gibt die Anzahl der Bézier-Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.curve.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
