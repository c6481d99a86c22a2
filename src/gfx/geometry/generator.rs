//! Swept-mesh generation.
//!
//! [`MeshGenerator`] stacks rings of a [`Profile`] along a [`Curve`],
//! stitches adjacent rings into a tube or strip surface, estimates
//! per-vertex normals in a separate neighbor-averaging pass, and can close
//! both ends with subdivided triangular caps.

use cgmath::{Deg, InnerSpace, Matrix3, Vector3, Zero};

use super::{Curve, GeometryError, MeshData, Profile, Vertex3D};

/// Default parameter increment between rings.
const DEFAULT_STEP: f32 = 0.05;

/// Forward-difference delta used to probe the curve tangent.
const DEFAULT_TANGENT_DELTA: f32 = 0.01;

/// Restores `floor(1/step)` when `1/step` lands just below an integer in f32
/// (e.g. `1.0 / 0.1f32` evaluates to 9.9999998…).
const RING_COUNT_TOLERANCE: f32 = 1e-4;

/// Squared-length threshold below which a vector is treated as degenerate.
const DEGENERATE_SQ: f32 = 1e-12;

/// Transient generator configuration; owns its curve and profile and is not
/// reused across objects.
pub struct MeshGenerator {
    curve: Curve,
    profile: Profile,
    base_vec: Vector3<f32>,
    step: f32,
    tangent_delta: f32,
    solid: bool,
    split_points: u32,
}

impl MeshGenerator {
    /// Create a generator for one sweep.
    ///
    /// `base_vec` fixes the profile's zero-angle direction; it must not be
    /// parallel to the curve's initial tangent.
    pub fn new(curve: Curve, profile: Profile, base_vec: Vector3<f32>) -> Self {
        Self {
            curve,
            profile,
            base_vec,
            step: DEFAULT_STEP,
            tangent_delta: DEFAULT_TANGENT_DELTA,
            solid: false,
            split_points: 0,
        }
    }

    /// Set the parameter increment between rings.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the forward-difference delta used to probe the curve tangent.
    pub fn with_tangent_delta(mut self, delta: f32) -> Self {
        self.tangent_delta = delta;
        self
    }

    /// Close both ends with caps subdivided `split_points` times per edge.
    pub fn with_solid(mut self, split_points: u32) -> Self {
        self.solid = true;
        self.split_points = split_points;
        self
    }

    /// Sweep the profile along the curve into `data`.
    ///
    /// Appends `floor(1/step) × profile.len()` swept vertices plus, in solid
    /// mode, two centroid vertices and the cap grids. `data.size` is frozen
    /// to the final index count. The generator's orientation vector is
    /// consumed by the parallel-transport update, so generation runs once.
    pub fn make_mesh(&mut self, data: &mut MeshData) -> Result<(), GeometryError> {
        if !self.step.is_finite() || self.step <= 0.0 || self.step > 0.5 {
            return Err(GeometryError::InvalidStep(self.step));
        }

        let size = self.profile.len() as u32;
        let edge_count = self.profile.edge_count() as u32;
        let rings = (1.0 / self.step + RING_COUNT_TOLERANCE).floor() as usize;

        let first_vertex = data.vertices.len() as u32;
        let mut centers = Vec::with_capacity(rings);

        for ring in 0..rings {
            let t = ring as f32 * self.step;
            let ring_start = data.vertices.len() as u32;
            let center = self.curve.point(t);
            let tangent = (self.curve.point(t + self.tangent_delta) - center).normalize();

            // Re-project the orientation vector onto the plane orthogonal to
            // the tangent so the profile cannot twist slice to slice.
            let transported = project_onto_plane(self.base_vec, tangent);
            if transported.magnitude2() < DEGENERATE_SQ {
                return Err(GeometryError::DegenerateBaseVector);
            }
            self.base_vec = transported.normalize();

            for (radius, angle) in self.profile.iter() {
                let direction =
                    (Matrix3::from_axis_angle(tangent, Deg(angle)) * self.base_vec).normalize();
                let position = center + direction * radius;
                // Provisional radial normal, overwritten by the averaging pass.
                data.vertices.push(Vertex3D {
                    position: position.into(),
                    normal: direction.into(),
                });
            }

            // Stitch to the previous ring, not required for the first.
            if ring > 0 {
                for i in 0..edge_count {
                    let p1 = ring_start - size + i;
                    let p2 = ring_start - size + (i + 1) % size;
                    let p3 = ring_start + (i + 1) % size;
                    let p4 = ring_start + i;

                    data.indices.extend_from_slice(&[p1, p2, p3]);
                    data.indices.extend_from_slice(&[p1, p3, p4]);
                }
            }

            centers.push(center);
        }

        self.estimate_normals(data, first_vertex as usize, rings, &centers);

        if self.solid {
            self.make_solid_caps(data, first_vertex);
        }

        data.size = data.indices.len() as u32;
        Ok(())
    }

    /// Neighbor-averaged normal estimation for the swept vertices.
    ///
    /// Radial normals are wrong near curve bends, so each vertex averages
    /// the cross products of its four neighbor edges instead: up/down along
    /// the sweep (reflected at the two ends, no wraparound) and left/right
    /// around the profile (wrapped when closed, reflected when open). Each
    /// cross product has two possible orientations; candidates more than 90°
    /// away from the path-radial reference are flipped before averaging.
    ///
    /// Runs as a separate pass because a ring's "down" neighbor does not
    /// exist yet while that ring is being swept.
    fn estimate_normals(
        &self,
        data: &mut MeshData,
        first_vertex: usize,
        rings: usize,
        centers: &[Vector3<f32>],
    ) {
        let size = self.profile.len();

        for ring in 0..rings {
            let up_ring = if ring == 0 { 1 } else { ring - 1 };
            let down_ring = if ring + 1 == rings { rings - 2 } else { ring + 1 };

            for slot in 0..size {
                let (left_slot, right_slot) = if self.profile.is_closed() {
                    ((slot + size - 1) % size, (slot + 1) % size)
                } else {
                    (
                        if slot == 0 { 1 } else { slot - 1 },
                        if slot + 1 == size { size - 2 } else { slot + 1 },
                    )
                };

                let at = |r: usize, s: usize| {
                    Vector3::from(data.vertices[first_vertex + r * size + s].position)
                };

                let position = at(ring, slot);
                let to_up = at(up_ring, slot) - position;
                let to_down = at(down_ring, slot) - position;
                let to_left = at(ring, left_slot) - position;
                let to_right = at(ring, right_slot) - position;

                let radial = position - centers[ring];
                if radial.magnitude2() < DEGENERATE_SQ {
                    // Vertex sits on the path itself; keep the provisional normal.
                    continue;
                }

                let mut sum = Vector3::zero();
                for candidate in [
                    to_up.cross(to_left),
                    to_up.cross(to_right),
                    to_down.cross(to_left),
                    to_down.cross(to_right),
                ] {
                    if candidate.magnitude2() < DEGENERATE_SQ {
                        continue;
                    }
                    sum += orient_outward(candidate, radial);
                }

                let normal = if sum.magnitude2() < DEGENERATE_SQ {
                    radial.normalize()
                } else {
                    orient_outward(sum.normalize(), radial)
                };

                data.vertices[first_vertex + ring * size + slot].normal = normal.into();
            }
        }
    }

    /// Append the two end centroids and tessellate a cap against each end
    /// ring. Cap vertices carry the flat end normal, not the averaged one.
    fn make_solid_caps(&self, data: &mut MeshData, first_vertex: u32) {
        let size = self.profile.len() as u32;
        let last_vertex = data.vertices.len() as u32;

        let begin_normal =
            (self.curve.point(0.0) - self.curve.point(self.tangent_delta)).normalize();
        data.vertices.push(Vertex3D {
            position: self.curve.point(0.0).into(),
            normal: begin_normal.into(),
        });

        let end_normal =
            (self.curve.point(1.0) - self.curve.point(1.0 - self.tangent_delta)).normalize();
        data.vertices.push(Vertex3D {
            position: self.curve.point(1.0).into(),
            normal: end_normal.into(),
        });

        self.make_cap(data, first_vertex, last_vertex, begin_normal);
        self.make_cap(data, last_vertex - size, last_vertex + 1, end_normal);
    }

    /// Fill one end with a fan of subdivided triangles.
    ///
    /// Each profile edge (A, B) forms a triangle with the end centroid C.
    /// The A→C and A→B directions are split into `split_points + 2` equal
    /// steps, a triangular grid of interpolated points is emitted row by
    /// row, and the grid is triangulated with alternating low and high
    /// triangles. Every edge fan keeps private copies of its corner
    /// vertices; duplicates are tolerated rather than welded.
    fn make_cap(&self, data: &mut MeshData, ring_start: u32, center_index: u32, normal: Vector3<f32>) {
        let size = self.profile.len() as u32;
        let splits = self.split_points;
        let sector_step = 1.0 / (splits + 1) as f32;

        for i in 0..self.profile.edge_count() as u32 {
            let a = Vector3::from(data.vertices[(ring_start + i) as usize].position);
            let b = Vector3::from(data.vertices[(ring_start + (i + 1) % size) as usize].position);
            let c = Vector3::from(data.vertices[center_index as usize].position);
            let ab = b - a;
            let ac = c - a;

            // A * * B
            //  * * *
            //   * *
            //    C
            let grid_start = data.vertices.len() as u32;
            for row in 0..splits + 2 {
                let row_origin = a + ac * (sector_step * row as f32);
                for col in 0..splits + 2 - row {
                    let position = row_origin + ab * (sector_step * col as f32);
                    data.vertices.push(Vertex3D {
                        position: position.into(),
                        normal: normal.into(),
                    });
                }
            }

            let mut row_offset = 0u32;
            for row in 0..splits + 1 {
                let row_len = splits + 2 - row;
                for k in 0..splits * 2 + 1 - row * 2 {
                    if k % 2 == 0 {
                        // Low triangle:
                        // 1   2
                        //   3
                        let p1 = grid_start + row_offset + k / 2;
                        let p2 = p1 + 1;
                        let p3 = grid_start + row_offset + row_len + k / 2;
                        data.indices.extend_from_slice(&[p1, p2, p3]);
                    } else {
                        // High triangle:
                        //   1
                        // 2   3
                        let p1 = grid_start + row_offset + k / 2 + 1;
                        let p2 = grid_start + row_offset + row_len + k / 2;
                        let p3 = p2 + 1;
                        data.indices.extend_from_slice(&[p1, p2, p3]);
                    }
                }
                row_offset += row_len;
            }
        }
    }
}

/// Remove the component of `v` along `plane_normal`.
fn project_onto_plane(v: Vector3<f32>, plane_normal: Vector3<f32>) -> Vector3<f32> {
    v - plane_normal * v.dot(plane_normal)
}

/// Resolve a candidate normal to the orientation within 90° of `reference`.
fn orient_outward(candidate: Vector3<f32>, reference: Vector3<f32>) -> Vector3<f32> {
    if candidate.dot(reference) < 0.0 {
        -candidate
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const EPS: f32 = 1e-4;

    fn straight_curve() -> Curve {
        Curve::new(vec![
            Vector3::new(0.0, -2.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    fn swept_square(solid: Option<u32>) -> MeshData {
        let mut generator = MeshGenerator::new(
            straight_curve(),
            Profile::square(),
            Vector3::new(1.0, 0.0, 0.0),
        )
        .with_step(0.1);
        if let Some(splits) = solid {
            generator = generator.with_solid(splits);
        }

        let mut data = MeshData::new();
        generator.make_mesh(&mut data).unwrap();
        data
    }

    #[test]
    fn test_square_sweep_counts() {
        // 10 rings of 4 vertices; 9 ring pairs x 4 edges x 2 triangles.
        let data = swept_square(None);
        assert_eq!(data.vertex_count(), 40);
        assert_eq!(data.triangle_count(), 72);
        assert_eq!(data.size, data.indices.len() as u32);
    }

    #[test]
    fn test_ring_cardinality_for_uneven_step() {
        // step = 0.07 does not divide 1.0; floor(1/0.07) = 14 rings.
        let fan = Profile::fan(40.0, 5.0, 5).unwrap();
        let mut generator = MeshGenerator::new(straight_curve(), fan, Vector3::new(1.0, 0.0, 0.0))
            .with_step(0.07)
            .with_tangent_delta(0.005);

        let mut data = MeshData::new();
        generator.make_mesh(&mut data).unwrap();
        assert_eq!(data.vertex_count(), 14 * 5);
    }

    #[test]
    fn test_solid_caps_add_centroids_and_edge_fans() {
        let open = swept_square(None);
        let solid = swept_square(Some(0));

        // Two centroid vertices at the curve endpoints, interpolated exactly.
        let begin = Vector3::from(solid.vertices[40].position);
        let end = Vector3::from(solid.vertices[41].position);
        assert!((begin - Vector3::new(0.0, -2.0, 0.0)).magnitude() < EPS);
        assert!((end - Vector3::new(0.0, 1.0, 0.0)).magnitude() < EPS);

        // split_points = 0: one triangle per profile edge per end.
        assert_eq!(solid.triangle_count(), open.triangle_count() + 8);
    }

    #[test]
    fn test_cap_subdivision_triangle_count() {
        // Each split level quadruples the per-edge triangle count.
        let open = swept_square(None);
        for splits in 1..4u32 {
            let data = swept_square(Some(splits));
            let per_edge = (splits as usize + 1) * (splits as usize + 1);
            assert_eq!(
                data.triangle_count(),
                open.triangle_count() + 2 * 4 * per_edge
            );
        }
    }

    #[test]
    fn test_open_profile_emits_no_wrap_triangles() {
        let fan = Profile::fan(80.0, 8.0, 11).unwrap();
        assert_eq!(fan.edge_count(), 10);

        let mut generator =
            MeshGenerator::new(straight_curve(), fan, Vector3::new(1.0, 0.0, 0.0)).with_step(0.1);
        let mut data = MeshData::new();
        generator.make_mesh(&mut data).unwrap();

        // 9 ring pairs x 10 edges x 2 triangles, and no triangle spans the
        // gap between profile slot 10 and slot 0.
        assert_eq!(data.triangle_count(), 9 * 10 * 2);
        for triangle in data.indices.chunks(3) {
            let slots: Vec<u32> = triangle.iter().map(|&i| i % 11).collect();
            let min = *slots.iter().min().unwrap();
            let max = *slots.iter().max().unwrap();
            assert!(max - min <= 1, "wraparound triangle: {:?}", slots);
        }
    }

    #[test]
    fn test_closed_side_wall_is_watertight_between_end_rings() {
        let data = swept_square(None);

        let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
        for triangle in data.indices.chunks(3) {
            for (a, b) in [
                (triangle[0], triangle[1]),
                (triangle[1], triangle[2]),
                (triangle[2], triangle[0]),
            ] {
                let key = (a.min(b), a.max(b));
                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }

        let last_ring = 36..40u32;
        let mut boundary = 0;
        for (&(a, b), &count) in &edge_counts {
            let on_first = a < 4 && b < 4;
            let on_last = last_ring.contains(&a) && last_ring.contains(&b);
            if on_first || on_last {
                assert_eq!(count, 1, "end-ring edge ({}, {}) shared", a, b);
                boundary += 1;
            } else {
                assert_eq!(count, 2, "edge ({}, {}) not shared by two triangles", a, b);
            }
        }
        assert_eq!(boundary, 8);
    }

    #[test]
    fn test_normals_are_unit_length() {
        for data in [swept_square(None), swept_square(Some(2))] {
            for vertex in &data.vertices {
                let magnitude = Vector3::from(vertex.normal).magnitude();
                assert!((magnitude - 1.0).abs() < EPS, "|n| = {}", magnitude);
            }
        }
    }

    #[test]
    fn test_normals_point_outward_from_path() {
        let curve = straight_curve();
        let data = swept_square(None);

        for (index, vertex) in data.vertices.iter().enumerate() {
            let ring = index / 4;
            let center = curve.point(ring as f32 * 0.1);
            let radial = Vector3::from(vertex.position) - center;
            let dot = Vector3::from(vertex.normal).dot(radial);
            assert!(dot >= 0.0, "inward normal at vertex {}", index);
        }
    }

    #[test]
    fn test_bent_curve_normals_stay_unit_and_outward() {
        let curve = Curve::new(vec![
            Vector3::new(0.0, -2.0, 0.0),
            Vector3::new(2.0, 0.0, 1.0),
            Vector3::new(0.0, 2.0, 0.0),
        ])
        .unwrap();
        let mut generator =
            MeshGenerator::new(curve.clone(), Profile::square(), Vector3::new(1.0, 0.0, 0.0))
                .with_step(0.05);

        let mut data = MeshData::new();
        generator.make_mesh(&mut data).unwrap();

        for (index, vertex) in data.vertices.iter().enumerate() {
            let ring = index / 4;
            let center = curve.point(ring as f32 * 0.05);
            let normal = Vector3::from(vertex.normal);
            assert!((normal.magnitude() - 1.0).abs() < EPS);
            assert!(normal.dot(Vector3::from(vertex.position) - center) >= 0.0);
        }
    }

    #[test]
    fn test_rejects_invalid_step() {
        for step in [0.0, -0.1, 0.6, f32::NAN] {
            let mut generator = MeshGenerator::new(
                straight_curve(),
                Profile::square(),
                Vector3::new(1.0, 0.0, 0.0),
            )
            .with_step(step);
            let mut data = MeshData::new();
            assert!(matches!(
                generator.make_mesh(&mut data),
                Err(GeometryError::InvalidStep(_))
            ));
        }
    }

    #[test]
    fn test_rejects_base_vector_parallel_to_tangent() {
        // The curve runs along +Y; a +Y base vector has no component left
        // after projection onto the ring plane.
        let mut generator = MeshGenerator::new(
            straight_curve(),
            Profile::square(),
            Vector3::new(0.0, 1.0, 0.0),
        )
        .with_step(0.1);
        let mut data = MeshData::new();
        assert!(matches!(
            generator.make_mesh(&mut data),
            Err(GeometryError::DegenerateBaseVector)
        ));
    }
}
