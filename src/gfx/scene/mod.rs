//! # Scene Management
//!
//! The scene owns every renderable object: its generated [`MeshData`], its
//! id (assigned locally at insertion) and its lazily created GPU resources.
//! Objects are inserted through [`Scene::add_object`], which runs the
//! recipe's generator exactly once; afterwards only the vertex Y-translation
//! may touch the mesh.

pub mod recipe;

pub use recipe::{MeshRecipe, ProfileSpec};

use crate::gfx::camera::CameraManager;
use crate::gfx::geometry::{GeometryError, MeshData};
use crate::gfx::rendering::ObjectGpuResources;

/// One renderable object: mesh data plus its GPU-side mirror.
pub struct SceneObject {
    pub id: u32,
    pub name: String,
    pub data: MeshData,
    pub(crate) gpu: Option<ObjectGpuResources>,
    pub(crate) dirty: bool,
}

impl SceneObject {
    /// Shift the object's vertices along Y and flag them for re-upload.
    pub fn translate_y(&mut self, dy: f32) {
        self.data.translate_y(dy);
        self.dirty = true;
    }
}

/// Container for scene objects and the active camera.
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<SceneObject>,
    next_id: u32,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            next_id: 0,
        }
    }

    /// Build a recipe's mesh and insert it, returning the new object's id.
    pub fn add_object(&mut self, name: &str, recipe: &MeshRecipe) -> Result<u32, GeometryError> {
        let data = recipe.build()?;
        let id = self.next_id;
        self.next_id += 1;

        log::debug!(
            "scene object {} ({}): {} vertices, {} triangles",
            id,
            name,
            data.vertex_count(),
            data.triangle_count()
        );

        self.objects.push(SceneObject {
            id,
            name: name.to_owned(),
            data,
            gpu: None,
            dirty: false,
        });
        Ok(id)
    }

    pub fn object_mut(&mut self, id: u32) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|object| object.id == id)
    }

    /// Apply the Y-translation to every object in the scene.
    pub fn translate_y(&mut self, dy: f32) {
        for object in &mut self.objects {
            object.translate_y(dy);
        }
    }

    /// Per-frame camera refresh.
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{CameraController, OrbitCamera};
    use cgmath::Vector3;

    fn test_scene() -> Scene {
        let camera = OrbitCamera::new(20.0, 0.35, 0.4, Vector3::new(0.0, 0.0, 0.0), 1.5);
        let controller = CameraController::new(0.005, 0.5);
        Scene::new(CameraManager::new(camera, controller))
    }

    #[test]
    fn test_ids_are_assigned_at_insertion() {
        let mut scene = test_scene();
        let person = scene.add_object("person", &MeshRecipe::person()).unwrap();
        let landscape = scene
            .add_object("landscape", &MeshRecipe::landscape())
            .unwrap();

        assert_eq!(person, 0);
        assert_eq!(landscape, 1);
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.object_mut(1).unwrap().name, "landscape");
    }

    #[test]
    fn test_translate_marks_object_dirty() {
        let mut scene = test_scene();
        let id = scene.add_object("person", &MeshRecipe::person()).unwrap();

        let object = scene.object_mut(id).unwrap();
        let before = object.data.vertices[0].position[1];
        assert!(!object.dirty);

        object.translate_y(-10.0);
        assert!(object.dirty);
        assert_eq!(object.data.vertices[0].position[1], before - 10.0);
    }
}
