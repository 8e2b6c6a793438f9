//! Typed handle describing how a finished trajectory should be rendered.
//!
//! Rendering itself is delegated to an external viewer; this side only
//! fixes the style and produces a scene description it can consume.

use na::Vector3;
use serde::Serialize;

use crate::trajectory::Trajectory;

/// Fixed space-fill look applied to every run.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RenderStyle {
    pub representation: &'static str,
    pub color: &'static str,
    pub radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            representation: "spacefill",
            color: "#80a0c0",
            radius: 0.5,
        }
    }
}

/// Fixed near and far clipping planes.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ClipPlanes {
    pub near: f64,
    pub far: f64,
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: 100.0,
        }
    }
}

#[derive(Debug)]
pub struct Viewer {
    pub trajectory: Trajectory,
    pub style: RenderStyle,
    pub clip: ClipPlanes,
    camera_center: Vector3<f64>,
}

impl Viewer {
    pub fn new(trajectory: Trajectory) -> Self {
        Self {
            trajectory,
            style: RenderStyle::default(),
            clip: ClipPlanes::default(),
            camera_center: Vector3::zeros(),
        }
    }

    /// Points the camera at the centroid of the first frame.
    pub fn center(&mut self) {
        if let Some(frame) = self.trajectory.first() {
            let mut sum: Vector3<f64> = Vector3::zeros();
            for i in 0..frame.positions.ncols() {
                sum += frame.positions.column(i);
            }
            self.camera_center = sum / frame.positions.ncols() as f64;
        }
    }

    pub fn camera_center(&self) -> Vector3<f64> {
        self.camera_center
    }

    /// Scene description for an external renderer.
    pub fn scene_json(&self) -> serde_json::Value {
        serde_json::json!({
            "element": self.trajectory.element,
            "n_atoms": self.trajectory.n_atoms,
            "n_frames": self.trajectory.n_frames(),
            "style": self.style,
            "clip": self.clip,
            "camera_center": [
                self.camera_center.x,
                self.camera_center.y,
                self.camera_center.z,
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation_box::SimulationBox;
    use crate::trajectory::Frame;
    use na::Matrix3xX;

    fn viewer_with_one_frame() -> Viewer {
        let positions = Matrix3xX::from_columns(&[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 4.0, 6.0),
        ]);
        let frame = Frame {
            step: 0,
            positions,
            sim_box: SimulationBox::from_bounds(0.0, 8.0, 0.0, 8.0, 0.0, 8.0),
        };
        Viewer::new(Trajectory::new("Cu", 2, vec![frame]))
    }

    #[test]
    fn centering_targets_the_first_frame_centroid() {
        let mut viewer = viewer_with_one_frame();
        assert_eq!(viewer.camera_center(), Vector3::zeros());

        viewer.center();
        assert_eq!(viewer.camera_center(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn scene_carries_the_fixed_style() {
        let mut viewer = viewer_with_one_frame();
        viewer.center();
        let scene = viewer.scene_json();

        assert_eq!(scene["style"]["representation"], "spacefill");
        assert_eq!(scene["style"]["radius"], 0.5);
        assert_eq!(scene["clip"]["far"], 100.0);
        assert_eq!(scene["element"], "Cu");
        assert_eq!(scene["n_frames"], 1);
        assert_eq!(scene["camera_center"][2], 3.0);
    }
}
