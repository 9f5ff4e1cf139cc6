use super::{IndexedMesh, Triangle, Tristrip};
use crate::core::math::Vector2;
use std::collections::HashMap;

/// Rolling two-slot state used to walk a strip by vertex index.
///
/// Seeded with the indexes of the first two strip vertexes. Each step emits
/// `(i0, i1, new)` then replaces `i0` on even steps and `i1` on odd steps, which reproduces the
/// alternating winding of [to_triangle_list] while adding one new index per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripWindow {
    pub i0: usize,
    pub i1: usize,
}

impl StripWindow {
    #[inline]
    pub fn new(i0: usize, i1: usize) -> Self {
        StripWindow { i0, i1 }
    }

    /// Emit the triple for strip position `step` (2 based) whose vertex index is `i2`.
    #[inline]
    pub fn advance(&mut self, step: usize, i2: usize) -> [usize; 3] {
        let triple = [self.i0, self.i1, i2];
        if step % 2 == 0 {
            self.i0 = i2;
        } else {
            self.i1 = i2;
        }
        triple
    }
}

/// Triangle at strip position `i` (`2 <= i < strip.len()`) with winding corrected so every
/// triangle of the strip has the same orientation.
#[inline]
fn strip_triangle(strip: &[Vector2], i: usize) -> Triangle {
    if i % 2 == 0 {
        Triangle::new(strip[i - 2], strip[i - 1], strip[i])
    } else {
        Triangle::new(strip[i - 1], strip[i - 2], strip[i])
    }
}

/// Expand strips into a flat triangle list.
///
/// Emits `max(0, L - 2)` triangles per strip of length `L`. Even positions keep the strip order,
/// odd positions swap the first two corners.
pub fn to_triangle_list(tristrip: &Tristrip) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(tristrip.triangle_count());
    for strip in &tristrip.strips {
        triangles.extend((2..strip.len()).map(|i| strip_triangle(strip, i)));
    }

    triangles
}

/// Build an indexed mesh from strips.
///
/// Vertexes are deduplicated by exact coordinate identity ([Vector2::bit_key]), indexes assigned in
/// first-seen order across all strips. Triangles follow the same winding as [to_triangle_list].
pub fn to_indexed_mesh(tristrip: &Tristrip) -> IndexedMesh {
    let mut lookup: HashMap<(u64, u64), usize> = HashMap::new();
    let mut vertices = Vec::new();
    // strip vertexes resolved to their mesh index, reused for the triangle pass
    let mut strip_indexes: Vec<Vec<usize>> = Vec::with_capacity(tristrip.strips.len());

    for strip in &tristrip.strips {
        let resolved = strip
            .iter()
            .map(|p| {
                *lookup.entry(p.bit_key()).or_insert_with(|| {
                    vertices.push(*p);
                    vertices.len() - 1
                })
            })
            .collect();
        strip_indexes.push(resolved);
    }

    let mut indices = Vec::with_capacity(tristrip.triangle_count());
    for strip in &strip_indexes {
        if strip.len() < 2 {
            continue;
        }

        let mut window = StripWindow::new(strip[0], strip[1]);
        for (i, &i2) in strip.iter().enumerate().skip(2) {
            indices.push(window.advance(i, i2));
        }
    }

    IndexedMesh { vertices, indices }
}
