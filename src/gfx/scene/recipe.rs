//! Mesh recipes.
//!
//! A [`MeshRecipe`] is the full configuration for one procedural object:
//! control points, profile choice, sweep constants and color. The scene's
//! object kinds form a closed set, so they are plain recipe values mapped
//! to [`MeshRecipe::build`] rather than a trait hierarchy.

use cgmath::Vector3;

use crate::gfx::geometry::{Curve, GeometryError, MeshData, MeshGenerator, Profile};

/// Which cross-section a recipe sweeps.
#[derive(Debug, Clone)]
pub enum ProfileSpec {
    /// The canonical closed square ring.
    Square,
    /// An open flat fan: `width` across, `depth` below the path, `samples`
    /// points.
    Fan {
        width: f32,
        depth: f32,
        samples: usize,
    },
}

impl ProfileSpec {
    fn build(&self) -> Result<Profile, GeometryError> {
        match *self {
            ProfileSpec::Square => Ok(Profile::square()),
            ProfileSpec::Fan {
                width,
                depth,
                samples,
            } => Profile::fan(width, depth, samples),
        }
    }
}

/// Everything needed to generate one object's mesh exactly once.
#[derive(Debug, Clone)]
pub struct MeshRecipe {
    pub control_points: Vec<Vector3<f32>>,
    pub profile: ProfileSpec,
    pub base_vec: Vector3<f32>,
    pub step: f32,
    pub solid: bool,
    pub split_points: u32,
    pub color: [f32; 4],
}

impl MeshRecipe {
    /// The humanoid figure: a capped square tube standing on the Y axis.
    pub fn person() -> Self {
        Self {
            control_points: vec![Vector3::new(0.0, -2.0, 0.0), Vector3::new(0.0, 1.0, 0.0)],
            profile: ProfileSpec::Square,
            base_vec: Vector3::new(1.0, 0.0, 0.0),
            step: 0.1,
            solid: true,
            split_points: 2,
            color: [0.0, 0.0, 1.0, 1.0],
        }
    }

    /// The terrain strip: an open fan swept along a gently dipping path.
    pub fn landscape() -> Self {
        Self {
            control_points: vec![
                Vector3::new(0.0, -6.0, -40.0),
                Vector3::new(0.0, -10.0, 0.0),
                Vector3::new(0.0, -6.0, 40.0),
            ],
            profile: ProfileSpec::Fan {
                width: 80.0,
                depth: 8.0,
                samples: 11,
            },
            base_vec: Vector3::new(1.0, 0.0, 0.0),
            step: 0.05,
            solid: false,
            split_points: 0,
            color: [0.3, 0.55, 0.25, 1.0],
        }
    }

    /// Run the generator once and hand back the finished mesh.
    pub fn build(&self) -> Result<MeshData, GeometryError> {
        let curve = Curve::new(self.control_points.clone())?;
        let profile = self.profile.build()?;

        let mut generator = MeshGenerator::new(curve, profile, self.base_vec).with_step(self.step);
        if self.solid {
            generator = generator.with_solid(self.split_points);
        }

        let mut data = MeshData::new();
        generator.make_mesh(&mut data)?;
        data.color = self.color;
        Ok(data)
    }
}
