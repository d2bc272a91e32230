use glam::{Vec3, Vec4};

/// Below this length a cross product is treated as parallel input
pub const BASIS_EPSILON: f32 = 1e-4;

/// Plane equation through `point` with normal `normalize(a × b)`.
///
/// Returns `(n.x, n.y, n.z, dot(point, n))`. Parallel or zero edges give a
/// NaN normal; callers must not pass degenerate edges.
pub fn face_plane(point: Vec3, a: Vec3, b: Vec3) -> Vec4 {
    let normal = a.cross(b).normalize();
    normal.extend(point.dot(normal))
}

/// Two unit vectors spanning the plane perpendicular to `axis`.
///
/// The first is `axis × X`, or `axis × Z` when the axis is (nearly) parallel to X.
pub fn orthonormal_basis(axis: Vec3) -> (Vec3, Vec3) {
    let axis = axis.normalize();
    let mut u = axis.cross(Vec3::X);
    if u.length() < BASIS_EPSILON {
        u = axis.cross(Vec3::Z);
    }
    let u = u.normalize();
    let v = axis.cross(u).normalize();
    (u, v)
}
