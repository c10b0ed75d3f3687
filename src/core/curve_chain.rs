//! Kontrollpunkt-Kette einer stückweisen kubischen Bézier-Kurve.
//!
//! Die Kette besitzt ihre Punkte exklusiv; alle Mutationen laufen über
//! `set_point`, es entkommen keine mutablen Referenzen auf einzelne Punkte.

use anyhow::{bail, Result};
use glam::Vec2;

/// Anzahl Kontrollpunkte pro kubischem Segment.
pub const POINTS_PER_SEGMENT: usize = 4;

/// Liefert alle vollständigen 4er-Gruppen aus `points`.
///
/// Segment i besteht aus den Indizes 3i..=3i+3; benachbarte Segmente teilen
/// sich den Endpunkt. Unvollständige Rest-Gruppen (Länge nicht 3k+1) werden
/// ausgelassen statt undefiniert konsumiert.
pub fn segments(points: &[Vec2]) -> impl Iterator<Item = [Vec2; 4]> + '_ {
    let count = if points.len() >= POINTS_PER_SEGMENT {
        (points.len() - 1) / 3
    } else {
        0
    };
    (0..count).map(|segment| {
        [
            points[3 * segment],
            points[3 * segment + 1],
            points[3 * segment + 2],
            points[3 * segment + 3],
        ]
    })
}

/// Geordnete Kontrollpunkt-Sequenz mit Invariante `len == 3k + 1, k >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveChain {
    points: Vec<Vec2>,
}

impl CurveChain {
    /// Erstellt eine Kette und erzwingt die Längen-Invariante.
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        if points.len() < POINTS_PER_SEGMENT || (points.len() - 1) % 3 != 0 {
            bail!(
                "Ungültige Kontrollpunkt-Anzahl {}: erwartet 3k + 1 mit k >= 1 (4, 7, 10, …)",
                points.len()
            );
        }
        Ok(Self { points })
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gibt die Anzahl der vollständigen Bézier-Segmente zurück.
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Read-only Sicht auf alle Kontrollpunkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Gibt den Kontrollpunkt an `index` zurück, `None` bei ungültigem Index.
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Setzt den Kontrollpunkt an `index` auf `pos`.
    ///
    /// Einziger Mutationspfad der Kette. Gibt `false` zurück wenn der Index
    /// außerhalb liegt; die Kette bleibt dann unverändert.
    pub fn set_point(&mut self, index: usize, pos: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = pos;
                true
            }
            None => false,
        }
    }

    /// Iteriert über alle Segmente als 4er-Gruppen mit geteilten Endpunkten.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 4]> + '_ {
        segments(&self.points)
    }

    /// Hit-Test: Index des ersten Punkts, dessen achsenparallele Box mit
    /// Kantenlänge `marker_size` die Position strikt enthält.
    ///
    /// Reihenfolge-Tie-Break: der erste Treffer in Sequenz-Reihenfolge
    /// gewinnt, keine Nearest-Point-Logik.
    pub fn hit_test(&self, pos: Vec2, marker_size: f32) -> Option<usize> {
        let half = marker_size / 2.0;
        self.points.iter().position(|p| {
            pos.x > p.x - half && pos.x < p.x + half && pos.y > p.y - half && pos.y < p.y + half
        })
    }
}

impl Default for CurveChain {
    /// Standard-Kette: ein Segment mit vier festen Kontrollpunkten.
    fn default() -> Self {
        Self {
            points: vec![
                Vec2::new(50.0, 100.0),
                Vec2::new(150.0, 50.0),
                Vec2::new(250.0, 50.0),
                Vec2::new(350.0, 100.0),
            ],
        }
    }
}
