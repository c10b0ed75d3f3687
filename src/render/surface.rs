//! Zeichenflächen-Abstraktion für den Kurven-Renderer.

use glam::Vec2;

/// Minimale 2D-Zeichenfläche: Hintergrund füllen, Linien und
/// umrandete Rechtecke zeichnen.
///
/// Koordinaten sind lokal zur Zeichenfläche (Pixel, Ursprung links oben),
/// Farben RGBA mit Komponenten in [0, 1]. Der Trait hält den Renderer
/// toolkit-frei und damit ohne Fenster testbar.
pub trait DrawSurface {
    /// Füllt die gesamte Zeichenfläche mit einer Farbe.
    fn fill_background(&mut self, color: [f32; 4]);

    /// Zeichnet eine gerade Linie von `from` nach `to`.
    fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]);

    /// Zeichnet ein umrandetes (nicht gefülltes) Quadrat, zentriert auf
    /// `center` mit Kantenlänge `size`.
    fn rect_stroked(&mut self, center: Vec2, size: f32, color: [f32; 4]);
}
