use foundation::math::{Mat4, Vec3};

/// Camera whose projection is frozen to whatever matrix the map supplied
/// last frame. It never computes a projection of its own, so the overlay
/// cannot drift from the map view.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCamera {
    pub position: Vec3,
    pub min_z: f64,
    frozen_projection: Option<Mat4>,
}

impl OverlayCamera {
    pub fn at_origin() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.0),
            min_z: 0.1,
            frozen_projection: None,
        }
    }

    pub fn freeze_projection(&mut self, projection: Mat4) {
        self.frozen_projection = Some(projection);
    }

    pub fn projection(&self) -> Option<Mat4> {
        self.frozen_projection
    }
}

/// Simple sky/ground light.
#[derive(Debug, Clone, PartialEq)]
pub struct HemisphericLight {
    pub direction: Vec3,
    pub intensity: f64,
}

impl HemisphericLight {
    pub fn new(direction: Vec3, intensity: f64) -> Self {
        Self {
            direction: direction.normalized(),
            intensity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub size: f64,
}

impl Mesh {
    /// Flat square mesh intended to carry the map imagery.
    pub fn plane(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCommand {
    SetProjection(Mat4),
    SetLight { direction: Vec3, intensity: f64 },
    DrawMesh { name: String },
}

/// Command list for one overlay frame, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayFrame {
    pub commands: Vec<OverlayCommand>,
}

/// The overlay's scene graph: one camera, one light, and the meshes drawn
/// over the map.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    pub camera: OverlayCamera,
    pub light: HemisphericLight,
    meshes: Vec<Mesh>,
}

impl OverlayScene {
    pub fn new() -> Self {
        Self {
            camera: OverlayCamera::at_origin(),
            light: HemisphericLight::new(Vec3::new(0.0, 1.0, 0.0), 0.7),
            meshes: vec![Mesh::plane("map_plane", 10.0)],
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Collects the commands for one frame. Nothing is emitted until the
    /// camera projection has been frozen at least once.
    pub fn render(&self) -> OverlayFrame {
        let Some(projection) = self.camera.projection() else {
            return OverlayFrame::default();
        };
        let mut commands = vec![
            OverlayCommand::SetProjection(projection),
            OverlayCommand::SetLight {
                direction: self.light.direction,
                intensity: self.light.intensity,
            },
        ];
        for mesh in &self.meshes {
            commands.push(OverlayCommand::DrawMesh {
                name: mesh.name.clone(),
            });
        }
        OverlayFrame { commands }
    }
}

impl Default for OverlayScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use foundation::math::{Mat4, Vec3};
    use pretty_assertions::assert_eq;

    use super::{Mesh, OverlayCommand, OverlayScene};

    #[test]
    fn fresh_scene_has_the_map_plane_and_no_projection() {
        let scene = OverlayScene::new();
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(scene.camera.min_z, 0.1);
        assert!(scene.camera.projection().is_none());
    }

    #[test]
    fn light_direction_is_normalized() {
        let scene = OverlayScene::new();
        assert!((scene.light.direction.length() - 1.0).abs() < 1e-12);
        assert_eq!(scene.light.intensity, 0.7);
    }

    #[test]
    fn render_is_empty_until_a_projection_is_frozen() {
        let mut scene = OverlayScene::new();
        assert!(scene.render().commands.is_empty());

        scene.camera.freeze_projection(Mat4::identity());
        let frame = scene.render();
        assert_eq!(
            frame.commands[0],
            OverlayCommand::SetProjection(Mat4::identity())
        );
        assert_eq!(
            frame.commands.last(),
            Some(&OverlayCommand::DrawMesh {
                name: "map_plane".to_string()
            })
        );
    }

    #[test]
    fn added_meshes_are_drawn_in_order() {
        let mut scene = OverlayScene::new();
        scene.camera.freeze_projection(Mat4::identity());
        scene.add_mesh(Mesh::plane("marker", 1.0));

        let names: Vec<_> = scene
            .render()
            .commands
            .into_iter()
            .filter_map(|c| match c {
                OverlayCommand::DrawMesh { name } => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(names, ["map_plane", "marker"]);
    }
}
