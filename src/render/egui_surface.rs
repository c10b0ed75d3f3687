//! `DrawSurface`-Implementierung über den egui-Painter.

use super::surface::DrawSurface;
use glam::Vec2;

const STROKE_WIDTH: f32 = 1.0;

/// Zeichnet auf den egui-Painter eines zugewiesenen Viewport-Rechtecks.
/// Lokale Zeichenflächen-Koordinaten werden um `rect.min` verschoben.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Zeichenfläche über `painter`, beschränkt auf `rect`.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(pos.x, pos.y)
    }
}

/// Konvertiert RGBA-Float-Farben in egui-Farben.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

impl DrawSurface for EguiSurface<'_> {
    fn fill_background(&mut self, color: [f32; 4]) {
        self.painter
            .rect_filled(self.rect, egui::CornerRadius::ZERO, color32(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(STROKE_WIDTH, color32(color)),
        );
    }

    fn rect_stroked(&mut self, center: Vec2, size: f32, color: [f32; 4]) {
        let rect = egui::Rect::from_center_size(self.to_screen(center), egui::Vec2::splat(size));
        self.painter.rect_stroke(
            rect,
            egui::CornerRadius::ZERO,
            egui::Stroke::new(STROKE_WIDTH, color32(color)),
            egui::StrokeKind::Middle,
        );
    }
}
