//! Rotating wireframe shapes of the 3D background.
//!
//! Every shape shares one icosahedron wireframe. Drawing projects its
//! edges through the camera and strokes them as screen-space segments.

use glam::{DMat4, DVec2, DVec3, EulerRot};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use smokescreen_core::constants::*;
use smokescreen_core::state::ShapeView;
use smokescreen_core::surface::DrawingSurface;
use smokescreen_core::types::{LineSegment, Viewport};

use crate::mesh::Wireframe;

/// Shapes use their own stream so the smoke sequence doesn't depend on the shape count.
const SHAPE_SEED_SALT: u64 = 0x5348_4150_4553;

/// Position and Euler rotation of one shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapePose {
    pub position: DVec3,
    pub rotation: DVec3,
}

/// Perspective camera looking down -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: DVec3,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            aspect: viewport.aspect(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: DVec3::new(0.0, 0.0, CAMERA_DISTANCE),
        }
    }

    pub fn projection(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, DVec3::ZERO, DVec3::Y)
    }
}

impl ShapePose {
    /// Local-to-world transform: translation after X, Y, Z rotation.
    pub fn model(&self) -> DMat4 {
        DMat4::from_translation(self.position)
            * DMat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

pub struct ShapeField {
    shapes: Vec<ShapePose>,
    camera: Camera,
    mesh: Wireframe,
}

impl ShapeField {
    /// Scatter `count` shapes in a cube around the origin with random tilt.
    pub fn create(count: usize, seed: u64, viewport: Viewport) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ SHAPE_SEED_SALT);
        let shapes = (0..count)
            .map(|_| {
                let position = DVec3::new(
                    (rng.gen::<f64>() - 0.5) * SHAPE_SPREAD,
                    (rng.gen::<f64>() - 0.5) * SHAPE_SPREAD,
                    (rng.gen::<f64>() - 0.5) * SHAPE_SPREAD,
                );
                let rotation = DVec3::new(
                    rng.gen::<f64>() * std::f64::consts::PI,
                    rng.gen::<f64>() * std::f64::consts::PI,
                    0.0,
                );
                ShapePose { position, rotation }
            })
            .collect();

        Self::from_poses(shapes, viewport)
    }

    /// Build a field from explicit poses.
    pub fn from_poses(shapes: Vec<ShapePose>, viewport: Viewport) -> Self {
        Self {
            shapes,
            camera: Camera::new(viewport),
            mesh: Wireframe::icosahedron(SHAPE_RADIUS, SHAPE_DETAIL),
        }
    }

    /// Spin every shape one step. Even indices turn +x, odd -x;
    /// multiples of three turn +y, the rest -y.
    pub fn tick(&mut self) {
        for (index, shape) in self.shapes.iter_mut().enumerate() {
            let sign_x = if index % 2 == 0 { 1.0 } else { -1.0 };
            let sign_y = if index % 3 == 0 { 1.0 } else { -1.0 };
            shape.rotation.x += SHAPE_ROTATION_STEP * sign_x;
            shape.rotation.y += SHAPE_ROTATION_STEP * sign_y;
        }
    }

    /// Stroke each shape's visible edges, one call per shape. Edges with an
    /// endpoint at or behind the near plane are skipped.
    pub fn draw(&self, surface: &mut impl DrawingSurface) {
        let viewport = surface.viewport();
        let view_projection = self.camera.projection() * self.camera.view();
        let mut segments = Vec::with_capacity(self.mesh.edges.len());

        for shape in &self.shapes {
            let mvp = view_projection * shape.model();
            segments.clear();
            for &(a, b) in &self.mesh.edges {
                let from = project(&mvp, self.mesh.vertices[a], viewport, self.camera.near);
                let to = project(&mvp, self.mesh.vertices[b], viewport, self.camera.near);
                if let (Some(from), Some(to)) = (from, to) {
                    segments.push(LineSegment { from, to });
                }
            }
            if !segments.is_empty() {
                surface.stroke_lines(&segments, SHAPE_COLOR, SHAPE_LINE_WIDTH);
            }
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
    }

    pub fn shapes(&self) -> &[ShapePose] {
        &self.shapes
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mesh(&self) -> &Wireframe {
        &self.mesh
    }

    pub fn views(&self) -> Vec<ShapeView> {
        self.shapes
            .iter()
            .map(|s| ShapeView {
                position: s.position,
                rotation: s.rotation,
            })
            .collect()
    }
}

/// Clip space to pixels, y pointing down.
fn project(mvp: &DMat4, point: DVec3, viewport: Viewport, near: f64) -> Option<DVec2> {
    let clip = *mvp * point.extend(1.0);
    if clip.w <= near {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(DVec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width as f64,
        (1.0 - ndc.y) * 0.5 * viewport.height as f64,
    ))
}
