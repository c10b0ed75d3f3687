//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: wird von `core::curve_chain` und `render` importiert,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// Berechnet einen Punkt auf einem kubischen Bézier-Segment (t ∈ [0, 1])
/// per de-Casteljau-Reduktion.
///
/// Die vier Kontrollpunkte werden paarweise interpoliert (4 → 3 → 2 → 1),
/// bis ein einzelner Punkt übrig bleibt. Numerisch stabiler als die
/// ausmultiplizierte Bernstein-Form, bei vier Punkten praktisch gleich teuer.
pub fn casteljau_point(control: [Vec2; 4], t: f32) -> Vec2 {
    let mut p = control;
    for level in (1..p.len()).rev() {
        for i in 0..level {
            p[i] = p[i].lerp(p[i + 1], t);
        }
    }
    p[0]
}

/// Tastet ein Segment als dichte Punktliste ab (Polyline-Approximation).
///
/// `samples`: Anzahl der Schritte; das Ergebnis enthält `samples + 1` Punkte
/// mit t = i / samples, beide Enden eingeschlossen. Bei t=0 liegt der erste,
/// bei t=1 exakt der letzte Kontrollpunkt auf der Kurve.
pub fn sample_segment(control: [Vec2; 4], samples: usize) -> Vec<Vec2> {
    let samples = samples.max(1);
    let mut result = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        result.push(casteljau_point(control, t));
    }
    result
}
