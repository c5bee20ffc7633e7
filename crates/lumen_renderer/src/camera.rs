//! Pinhole camera for primary ray generation.

use lumen_math::{is_zero, Point, Ray, Vector};

use crate::CameraError;

/// Pinhole camera with an orthonormal frame and a view plane.
///
/// Built through [`Camera::builder`]; a built camera is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    location: Point,
    v_to: Vector,
    v_up: Vector,
    v_right: Vector,
    width: f64,
    height: f64,
    distance: f64,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn v_to(&self) -> Vector {
        self.v_to
    }

    pub fn v_up(&self) -> Vector {
        self.v_up
    }

    pub fn v_right(&self) -> Vector {
        self.v_right
    }

    /// View plane width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// View plane height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Distance from the camera to the view plane
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Ray from the camera through the center of pixel (`j`, `i`) of an
    /// `nx` by `ny` grid laid over the view plane.
    ///
    /// `j` counts columns left to right, `i` rows top to bottom.
    pub fn construct_ray(&self, nx: u32, ny: u32, j: u32, i: u32) -> Ray {
        let rx = self.width / f64::from(nx.max(1));
        let ry = self.height / f64::from(ny.max(1));
        let x_j = (f64::from(j) - (f64::from(nx) - 1.0) / 2.0) * rx;
        let y_i = -(f64::from(i) - (f64::from(ny) - 1.0) / 2.0) * ry;

        let mut p_ij = match self.v_to.scale(self.distance) {
            Ok(to_center) => self.location.add(&to_center),
            Err(_) => self.location,
        };
        // A zero offset leaves the point on the center line.
        if !is_zero(x_j) {
            if let Ok(step) = self.v_right.scale(x_j) {
                p_ij = p_ij.add(&step);
            }
        }
        if !is_zero(y_i) {
            if let Ok(step) = self.v_up.scale(y_i) {
                p_ij = p_ij.add(&step);
            }
        }

        match p_ij.subtract(&self.location) {
            Ok(dir) => Ray::new(self.location, dir),
            Err(_) => Ray::new(self.location, self.v_to),
        }
    }
}

/// Step-by-step camera construction.
#[derive(Debug, Clone, Default)]
pub struct CameraBuilder {
    location: Option<Point>,
    direction: Option<(Vector, Vector)>,
    vp_size: Option<(f64, f64)>,
    vp_distance: Option<f64>,
}

impl CameraBuilder {
    pub fn with_location(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the view direction and up vector. They must be orthogonal.
    pub fn with_direction(mut self, to: Vector, up: Vector) -> Self {
        self.direction = Some((to, up));
        self
    }

    /// Set the view plane size.
    pub fn with_vp_size(mut self, width: f64, height: f64) -> Self {
        self.vp_size = Some((width, height));
        self
    }

    /// Set the camera to view plane distance.
    pub fn with_vp_distance(mut self, distance: f64) -> Self {
        self.vp_distance = Some(distance);
        self
    }

    /// Validate every field and derive the right vector.
    pub fn build(self) -> Result<Camera, CameraError> {
        let location = self.location.ok_or(CameraError::MissingField("location"))?;
        let (to, up) = self
            .direction
            .ok_or(CameraError::MissingField("direction"))?;
        let (width, height) = self
            .vp_size
            .ok_or(CameraError::MissingField("view plane size"))?;
        let distance = self
            .vp_distance
            .ok_or(CameraError::MissingField("view plane distance"))?;

        let v_to = to.normalize();
        let v_up = up.normalize();
        if !is_zero(v_to.dot(&v_up)) {
            return Err(CameraError::NotOrthogonal);
        }

        for (field, value) in [("width", width), ("height", height), ("distance", distance)] {
            // Written so that NaN fails too
            if !(value > 0.0) {
                return Err(CameraError::NonPositive { field, value });
            }
        }

        let v_right = v_to.cross(&v_up)?.normalize();
        if !is_zero(v_right.dot(&v_to)) {
            return Err(CameraError::NotOrthogonal);
        }

        log::debug!(
            "Camera at {} looking {} (up {}), view plane {}x{} at {}",
            location,
            v_to,
            v_up,
            width,
            height,
            distance
        );

        Ok(Camera {
            location,
            v_to,
            v_up,
            v_right,
            width,
            height,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CameraBuilder {
        Camera::builder()
            .with_location(Point::ZERO)
            .with_direction(-Vector::Z, Vector::Y)
            .with_vp_distance(10.0)
    }

    fn assert_dir(ray: &Ray, x: f64, y: f64, z: f64) {
        let expected = Vector::new(x, y, z).unwrap().normalize();
        let got = ray.direction();
        assert!(
            (got.xyz() - expected.xyz()).length() < 1e-9,
            "expected {}, got {}",
            expected,
            got
        );
    }

    #[test]
    fn test_right_vector() {
        let camera = builder().with_vp_size(3.0, 3.0).build().unwrap();
        assert_eq!(camera.v_right(), Vector::X);
    }

    #[test]
    fn test_construct_ray_odd_grid() {
        let camera = builder().with_vp_size(6.0, 6.0).build().unwrap();

        // Center pixel of a 3x3 grid
        let ray = camera.construct_ray(3, 3, 1, 1);
        assert_eq!(ray.origin(), Point::ZERO);
        assert_dir(&ray, 0.0, 0.0, -10.0);

        // Corner and edge pixels
        assert_dir(&camera.construct_ray(3, 3, 0, 0), -2.0, 2.0, -10.0);
        assert_dir(&camera.construct_ray(3, 3, 1, 0), 0.0, 2.0, -10.0);
        assert_dir(&camera.construct_ray(3, 3, 2, 2), 2.0, -2.0, -10.0);
    }

    #[test]
    fn test_construct_ray_even_grid() {
        let camera = builder().with_vp_size(8.0, 8.0).build().unwrap();
        assert_dir(&camera.construct_ray(4, 4, 1, 1), -1.0, 1.0, -10.0);
        assert_dir(&camera.construct_ray(4, 4, 3, 0), 3.0, 3.0, -10.0);
    }

    #[test]
    fn test_missing_fields() {
        let err = Camera::builder().build().unwrap_err();
        assert_eq!(err, CameraError::MissingField("location"));

        let err = builder().build().unwrap_err();
        assert_eq!(err, CameraError::MissingField("view plane size"));

        let err = Camera::builder()
            .with_location(Point::ZERO)
            .with_vp_size(1.0, 1.0)
            .with_vp_distance(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, CameraError::MissingField("direction"));
    }

    #[test]
    fn test_not_orthogonal() {
        let err = builder()
            .with_direction(-Vector::Z, Vector::new(0.0, 1.0, 1.0).unwrap())
            .with_vp_size(1.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, CameraError::NotOrthogonal);
    }

    #[test]
    fn test_non_positive_sizes() {
        let err = builder().with_vp_size(0.0, 1.0).build().unwrap_err();
        assert!(matches!(err, CameraError::NonPositive { field: "width", .. }));

        let err = builder()
            .with_vp_size(1.0, 1.0)
            .with_vp_distance(-2.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CameraError::NonPositive { field: "distance", value } if value == -2.0
        ));
    }
}
