//! Generic indexed mesh with midpoint subdivision and spherization.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

/// A mesh vertex. Normals are derived, never authored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// Three vertex indices; counter-clockwise winding faces outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// Ordered vertices plus faces indexing into them.
///
/// Every face index refers to an existing vertex; the builder methods
/// below are the only way to grow a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex with a zero normal and return its index.
    pub fn add_vertex(&mut self, position: Vec3, uv: Vec2) -> u32 {
        self.vertices.push(Vertex {
            position,
            normal: Vec3::ZERO,
            uv,
        });
        (self.vertices.len() - 1) as u32
    }

    /// Append a face. Returns `false` and leaves the mesh untouched if any
    /// index is out of range.
    pub fn add_face(&mut self, a: u32, b: u32, c: u32) -> bool {
        let n = self.vertices.len() as u32;
        if a >= n || b >= n || c >= n {
            return false;
        }
        self.faces.push(Face::new(a, b, c));
        true
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Flattened triangle-list index buffer.
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flat_map(Face::indices).collect()
    }

    /// Vertex positions in mesh order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Split every face into four through its edge midpoints, `divisions`
    /// times over.
    ///
    /// Midpoints are cached by unordered vertex pair for the whole call, so
    /// an edge shared by two faces gets exactly one midpoint vertex no
    /// matter which face reaches it first.
    pub fn subdivide(mut self, divisions: u32) -> Self {
        let mut cache: HashMap<(u32, u32), u32> = HashMap::new();

        for _ in 0..divisions {
            let previous = std::mem::take(&mut self.faces);
            self.faces.reserve(previous.len() * 4);

            for face in previous {
                let ab = self.midpoint(&mut cache, face.a, face.b);
                let bc = self.midpoint(&mut cache, face.b, face.c);
                let ca = self.midpoint(&mut cache, face.c, face.a);

                self.faces.push(Face::new(face.a, ab, ca));
                self.faces.push(Face::new(face.b, bc, ab));
                self.faces.push(Face::new(face.c, ca, bc));
                self.faces.push(Face::new(ab, bc, ca));
            }
        }

        self
    }

    /// Push every vertex onto a sphere of `radius` and point its normal
    /// along the same direction. Vertices at the origin keep their position.
    pub fn spherize(mut self, radius: f32) -> Self {
        for v in &mut self.vertices {
            let dir = v.position.normalize_or_zero();
            if dir != Vec3::ZERO {
                v.position = dir * radius;
                v.normal = dir;
            }
        }
        self
    }

    /// Area-weighted vertex normals from face winding.
    pub fn compute_vertex_normals(&mut self) {
        for v in &mut self.vertices {
            v.normal = Vec3::ZERO;
        }
        for face in &self.faces {
            let [a, b, c] = face.indices().map(|i| self.vertices[i as usize].position);
            let n = (b - a).cross(c - a);
            for i in face.indices() {
                self.vertices[i as usize].normal += n;
            }
        }
        for v in &mut self.vertices {
            v.normal = v.normal.normalize_or_zero();
        }
    }

    fn midpoint(&mut self, cache: &mut HashMap<(u32, u32), u32>, a: u32, b: u32) -> u32 {
        let key = if a < b { (a, b) } else { (b, a) };
        if let Some(&index) = cache.get(&key) {
            return index;
        }

        let va = self.vertices[a as usize];
        let vb = self.vertices[b as usize];
        let index = self.add_vertex((va.position + vb.position) * 0.5, (va.uv + vb.uv) * 0.5);
        cache.insert(key, index);
        index
    }
}

// =============================================================================
// Tests
// =============================================================================
