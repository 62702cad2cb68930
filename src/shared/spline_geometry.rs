//! Reine Geometrie-Funktionen für Catmull-Rom-Splines und Polylinien.
//!
//! Layer-neutral: wird vom `CurveModel` und von den Benchmarks genutzt,
//! ohne Abhängigkeit auf App- oder UI-Typen.

use glam::Vec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Parameterwerte `t` eines Segments bei Schrittweite `step`.
///
/// `t` startet bei 0 und wird in f64 schrittweise um `step` erhöht, solange
/// `t ≤ 1`. Ob `t = 1` selbst erreicht wird, entscheidet die Rundung der
/// Summe: bei 0.25 oder 1.0 ja, bei 0.01 nicht (100 Werte).
/// Ungültige Schrittweiten (≤ 0, NaN) liefern nur `t = 0`.
pub fn segment_parameters(step: f64) -> Vec<f32> {
    if !(step > 0.0) {
        return vec![0.0];
    }
    let mut params = Vec::new();
    let mut t = 0.0_f64;
    while t <= 1.0 {
        params.push(t as f32);
        t += step;
    }
    params
}

/// Dichte Punktliste entlang einer Catmull-Rom-Spline durch `points`.
///
/// Randsegmente verwenden keine gespiegelten Phantom-Punkte: fehlt der
/// Vorgänger, wird der erste Punkt doppelt verwendet, fehlt der Nachfolger,
/// der letzte verfügbare. Die Segmente werden ohne Deduplizierung aneinandergehängt.
pub fn catmull_rom_chain(points: &[Vec2], step: f64) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let params = segment_parameters(step);
    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * params.len());

    for seg in 0..(n - 1) {
        let p0 = points[seg.saturating_sub(1)];
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = points.get(seg + 2).copied().unwrap_or(p2);

        for &t in &params {
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    result
}

/// Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Punkt bei Anteil `fraction` der Bogenlänge einer Polyline.
///
/// `fraction` wird auf [0, 1] begrenzt. Segmente ohne Länge liefern ihren
/// Startpunkt, Rundungsreste am Ende den letzten Punkt. `None` nur bei leerer Eingabe.
pub fn point_at_fraction(points: &[Vec2], fraction: f32) -> Option<Vec2> {
    let first = *points.first()?;
    let last = *points.last()?;

    let total = polyline_length(points);
    if total < f32::EPSILON {
        return Some(first);
    }

    let mut remaining = total * fraction.clamp(0.0, 1.0);
    for w in points.windows(2) {
        let seg_len = w[0].distance(w[1]);
        if remaining <= seg_len {
            if seg_len < f32::EPSILON {
                return Some(w[0]);
            }
            return Some(w[0].lerp(w[1], remaining / seg_len));
        }
        remaining -= seg_len;
    }

    Some(last)
}
