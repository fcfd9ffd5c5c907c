use glam::{Mat4, Vec3};
use crate::error::Error;
use super::*;

const TRIANGLE: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

fn upload_triangle(r: &mut MockRasterizer) -> MeshHandle {
    r.upload_mesh(MeshUploadDesc { vertices: &TRIANGLE, indices: &[0, 1, 2] }).unwrap()
}

// ============================================================================
// Upload / release
// ============================================================================

#[test]
fn test_upload_records_sizes() {
    let mut r = MockRasterizer::new();
    let handle = upload_triangle(&mut r);

    assert_eq!(r.meshes[&handle], MockMesh { vertex_count: 3, index_count: 3 });
    assert_eq!(r.stats().live_meshes, 1);
}

#[test]
fn test_handles_are_unique() {
    let mut r = MockRasterizer::new();
    let a = upload_triangle(&mut r);
    let b = upload_triangle(&mut r);
    assert_ne!(a, b);
}

#[test]
fn test_release_unknown_handle_is_ignored() {
    let mut r = MockRasterizer::new();
    let handle = upload_triangle(&mut r);
    r.release_mesh(handle);
    r.release_mesh(handle);

    assert_eq!(r.count("release_mesh"), 1);
    assert_eq!(r.stats().live_meshes, 0);
}

#[test]
fn test_fail_uploads() {
    let mut r = MockRasterizer::new();
    r.fail_uploads = true;
    let result = r.upload_mesh(MeshUploadDesc { vertices: &TRIANGLE, indices: &[0, 1, 2] });
    assert!(matches!(result, Err(Error::BackendError(_))));
}

// ============================================================================
// Uniforms and draws
// ============================================================================

#[test]
fn test_write_matrix_round_trips_column_major() {
    let mut r = MockRasterizer::new();
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    r.write_matrix(UniformSlot::View, &m).unwrap();

    assert_eq!(r.uniform(UniformSlot::View), Some(m));
}

#[test]
fn test_write_uniform_rejects_wrong_size() {
    let mut r = MockRasterizer::new();
    let result = r.write_uniform(UniformSlot::Transform, &[0u8; 12]);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_draw_without_bind_fails() {
    let mut r = MockRasterizer::new();
    assert!(r.draw_indexed(3, 0).is_err());
}

#[test]
fn test_draw_counts_triangles() {
    let mut r = MockRasterizer::new();
    let handle = upload_triangle(&mut r);
    r.bind_mesh(handle).unwrap();
    r.draw_indexed(3, 0).unwrap();
    r.draw_indexed(3, 0).unwrap();

    assert_eq!(r.stats().draw_calls, 2);
    assert_eq!(r.stats().triangles, 2);
    assert_eq!(r.drawn_transforms.len(), 2);
}

#[test]
fn test_uniform_slot_names() {
    assert_eq!(UniformSlot::Transform.name(), "transform");
    assert_eq!(UniformSlot::View.name(), "view");
    assert_eq!(UniformSlot::Projection.name(), "projection");
}
