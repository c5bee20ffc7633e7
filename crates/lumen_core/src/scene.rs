//! Scene description consumed by the tracer.
//!
//! A scene is assembled once through [`SceneBuilder`] and is read-only
//! afterwards, so one scene can be shared by reference across render
//! workers.

use crate::{AmbientLight, Color, Geometries, Intersectable, LightSource};

/// Geometry, lights and background of a render.
pub struct Scene {
    name: String,
    background: Color,
    ambient_light: AmbientLight,
    geometries: Geometries,
    lights: Vec<Box<dyn LightSource>>,
}

impl Scene {
    /// Start building a scene with a black background, no ambient light,
    /// no geometry and no lights.
    pub fn builder(name: impl Into<String>) -> SceneBuilder {
        SceneBuilder {
            name: name.into(),
            background: Color::ZERO,
            ambient_light: AmbientLight::NONE,
            geometries: Geometries::new(),
            lights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color returned for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient_light
    }

    /// Root of the geometry tree.
    pub fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    pub fn lights(&self) -> &[Box<dyn LightSource>] {
        &self.lights
    }
}

/// Builder for [`Scene`].
pub struct SceneBuilder {
    name: String,
    background: Color,
    ambient_light: AmbientLight,
    geometries: Geometries,
    lights: Vec<Box<dyn LightSource>>,
}

impl SceneBuilder {
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Replace the geometry root.
    pub fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Add one geometry (or a nested composite) to the root.
    pub fn add_geometry(mut self, geometry: impl Intersectable + 'static) -> Self {
        self.geometries.add(geometry);
        self
    }

    pub fn add_light(mut self, light: impl LightSource + 'static) -> Self {
        self.lights.push(Box::new(light));
        self
    }

    pub fn build(self) -> Scene {
        log::debug!(
            "Built scene '{}': {} top-level geometries, {} lights",
            self.name,
            self.geometries.len(),
            self.lights.len()
        );
        Scene {
            name: self.name,
            background: self.background,
            ambient_light: self.ambient_light,
            geometries: self.geometries,
            lights: self.lights,
        }
    }
}
