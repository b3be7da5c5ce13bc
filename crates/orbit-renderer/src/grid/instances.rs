//! Per-tile transform storage.

use glam::{Mat4, Vec3};

/// Fixed anchor directions and one transform slot per anchor, in a single
/// contiguous array that uploads as-is.
#[derive(Debug, Clone)]
pub struct InstanceArena {
    anchors: Vec<Vec3>,
    transforms: Vec<Mat4>,
}

impl InstanceArena {
    pub fn new(anchors: Vec<Vec3>) -> Self {
        let transforms = vec![Mat4::IDENTITY; anchors.len()];
        Self {
            anchors,
            transforms,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn anchors(&self) -> &[Vec3] {
        &self.anchors
    }

    pub fn anchor(&self, index: usize) -> Option<Vec3> {
        self.anchors.get(index).copied()
    }

    #[cfg(test)]
    pub(crate) fn transform(&self, index: usize) -> Option<Mat4> {
        self.transforms.get(index).copied()
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    /// Out-of-range writes are ignored.
    pub fn set_transform(&mut self, index: usize, transform: Mat4) {
        if let Some(slot) = self.transforms.get_mut(index) {
            *slot = transform;
        }
    }

    /// Column-major `f32` view of every transform, in anchor order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.transforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_identity_slot_per_anchor() {
        let arena = InstanceArena::new(vec![Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(arena.len(), 3);
        assert!(arena.transforms().iter().all(|m| *m == Mat4::IDENTITY));
    }

    #[test]
    fn set_transform_by_index() {
        let mut arena = InstanceArena::new(vec![Vec3::X, Vec3::Y]);
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        arena.set_transform(1, m);
        arena.set_transform(7, m);
        assert_eq!(arena.transform(0), Some(Mat4::IDENTITY));
        assert_eq!(arena.transform(1), Some(m));
        assert_eq!(arena.transform(7), None);
    }

    #[test]
    fn bytes_are_contiguous_column_major() {
        let mut arena = InstanceArena::new(vec![Vec3::X, Vec3::Y]);
        arena.set_transform(1, Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0)));
        let bytes = arena.as_bytes();
        assert_eq!(bytes.len(), 2 * 64);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        // Translation lives in the fourth column of the second matrix.
        assert_eq!(&floats[16 + 12..16 + 15], &[5.0, 6.0, 7.0]);
    }
}
