mod aabb;
mod basis;

pub use aabb::AABB;
pub use basis::{face_plane, orthonormal_basis, BASIS_EPSILON};
