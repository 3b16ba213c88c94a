#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Box2D = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Mirrors `p` through `center` (`2 * center - p`).
pub fn reflect(p: Point, center: Point) -> Point {
    center + (center - p)
}

/// Resolves a parsed coordinate against the current point when `relative` is set.
pub fn resolve(p: Point, current: Point, relative: bool) -> Point {
    if relative { current + p.to_vector() } else { p }
}
