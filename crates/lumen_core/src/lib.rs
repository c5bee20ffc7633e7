//! Lumen Core - everything a ray can hit or be lit by.
//!
//! This crate provides:
//!
//! - **Shapes**: `Plane`, `Polygon`, `Triangle`, `Sphere`, `Tube`, `Cylinder`
//! - **Geometry**: a shape with emission and `Material`, plus the
//!   `Geometries` composite, all behind the `Intersectable` contract
//! - **Lights**: ambient, directional, point and spot lights, with disc
//!   sampling for soft shadows (`BlackBoard`)
//! - **Scene**: the read-only aggregate consumed by the tracer
//!
//! # Example
//!
//! ```
//! use lumen_core::{Color, Geometry, Material, PointLight, Scene, Sphere};
//! use lumen_math::Point;
//!
//! let sphere = Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0)?;
//! let scene = Scene::builder("demo")
//!     .with_background(Color::new(0.1, 0.1, 0.1))
//!     .add_geometry(Geometry::new(sphere).with_material(Material::new().with_kd(0.8)))
//!     .add_light(PointLight::new(Color::ONE, Point::new(0.0, 5.0, 0.0)))
//!     .build();
//! assert_eq!(scene.lights().len(), 1);
//! # Ok::<(), lumen_core::GeometryError>(())
//! ```

mod blackboard;
mod cylinder;
mod error;
mod geometries;
mod geometry;
mod intersectable;
mod light;
mod material;
mod plane;
mod polygon;
mod scene;
mod sphere;
mod triangle;
mod tube;

pub use blackboard::{BlackBoard, DEFAULT_CELLS, MAX_CELLS};
pub use cylinder::Cylinder;
pub use error::{GeometryError, GeometryResult, LightError};
pub use geometries::Geometries;
pub use geometry::{Geometry, Shape};
pub use intersectable::{GeoPoint, Intersectable};
pub use light::{AmbientLight, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::{Color, IntoDouble3, Material};
pub use plane::Plane;
pub use polygon::Polygon;
pub use scene::{Scene, SceneBuilder};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::Tube;
