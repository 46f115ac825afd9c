use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use primer_core::{DomainError, DomainResult};

/// Capability set shared by every shape variant.
///
/// `describe` is shared behavior built on top of the polymorphic calls, so
/// every variant gets it for free.
pub trait Shape {
    /// Enclosed area, in squared units of the dimensions.
    fn area(&self) -> f64;

    /// Boundary length.
    fn perimeter(&self) -> f64;

    fn color(&self) -> &str;

    fn set_color(&mut self, color: String);

    /// Human-readable summary: color, area, perimeter.
    fn describe(&self) -> String {
        format!(
            "color: {}, area: {}, perimeter: {}",
            self.color(),
            self.area(),
            self.perimeter()
        )
    }
}

fn ensure_dimension(value: f64, what: &str) -> DomainResult<()> {
    // Rejecting negative geometry keeps area/perimeter >= 0.
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid_argument(format!(
            "{what} must be a non-negative finite number"
        )))
    }
}

/// Circle described by its radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    color: String,
    radius: f64,
}

impl Circle {
    pub fn new(color: impl Into<String>, radius: f64) -> DomainResult<Self> {
        ensure_dimension(radius, "radius")?;
        Ok(Self {
            color: color.into(),
            radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn set_color(&mut self, color: String) {
        self.color = color;
    }
}

/// Rectangle described by length and width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    color: String,
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(color: impl Into<String>, length: f64, width: f64) -> DomainResult<Self> {
        ensure_dimension(length, "length")?;
        ensure_dimension(width, "width")?;
        Ok(Self {
            color: color.into(),
            length,
            width,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn set_color(&mut self, color: String) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn circle_formulas() {
        let circle = Circle::new("red", 3.0).unwrap();
        assert_close(circle.area(), PI * 9.0);
        assert_close(circle.perimeter(), 2.0 * PI * 3.0);
    }

    #[test]
    fn rectangle_formulas() {
        let rectangle = Rectangle::new("blue", 5.0, 4.0).unwrap();
        assert_close(rectangle.area(), 20.0);
        assert_close(rectangle.perimeter(), 18.0);
    }

    #[test]
    fn zero_geometry_is_allowed() {
        let point = Circle::new("red", 0.0).unwrap();
        assert_eq!(point.area(), 0.0);
        assert_eq!(point.perimeter(), 0.0);
    }

    #[test]
    fn negative_geometry_is_rejected() {
        assert!(Circle::new("red", -1.0).is_err());
        assert!(Rectangle::new("blue", -5.0, 4.0).is_err());
        assert!(Rectangle::new("blue", 5.0, -4.0).is_err());
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        assert!(Circle::new("red", f64::NAN).is_err());
        assert!(Circle::new("red", f64::INFINITY).is_err());
        assert!(Rectangle::new("blue", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn color_is_mutable_after_construction() {
        let mut circle = Circle::new("yellow", 5.0).unwrap();
        assert_eq!(circle.color(), "yellow");

        circle.set_color("purple".to_string());
        assert_eq!(circle.color(), "purple");
    }

    #[test]
    fn describe_contains_color_area_and_perimeter() {
        let mut circle = Circle::new("yellow", 5.0).unwrap();
        circle.set_color("purple".to_string());

        let info = circle.describe();
        assert!(info.contains("purple"));
        assert!(info.contains("area"));
        assert!(info.contains("perimeter"));
    }

    #[test]
    fn area_is_polymorphic_across_variants() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new("red", 2.0).unwrap()),
            Box::new(Rectangle::new("blue", 3.0, 4.0).unwrap()),
        ];

        let total: f64 = shapes.iter().map(|shape| shape.area()).sum();
        assert_close(total, 4.0 * PI + 12.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: valid geometry never produces a negative area or
        /// perimeter.
        #[test]
        fn measurements_are_never_negative(
            radius in 0.0f64..1e3,
            length in 0.0f64..1e3,
            width in 0.0f64..1e3,
        ) {
            let circle = Circle::new("red", radius).unwrap();
            prop_assert!(circle.area() >= 0.0);
            prop_assert!(circle.perimeter() >= 0.0);

            let rectangle = Rectangle::new("blue", length, width).unwrap();
            prop_assert!(rectangle.area() >= 0.0);
            prop_assert!(rectangle.perimeter() >= 0.0);
        }

        /// Property: a circle's measurements grow with its radius.
        #[test]
        fn circle_measurements_scale_with_radius(
            small in 0.0f64..1e3,
            delta in 0.001f64..1e3,
        ) {
            let inner = Circle::new("red", small).unwrap();
            let outer = Circle::new("red", small + delta).unwrap();
            prop_assert!(outer.area() > inner.area());
            prop_assert!(outer.perimeter() > inner.perimeter());
        }
    }
}
