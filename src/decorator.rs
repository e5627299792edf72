/// An object responsibilities can be attached to dynamically. The result is a
/// rectangle's two sides so that decorators can derive further measures from
/// them.
pub trait Component {
    fn operation(&self) -> (f64, f64);
}

/// The base component. Reports its area and yields its sides unchanged.
pub struct Rectangle {
    side0: f64,
    side1: f64,
}

impl Rectangle {
    pub fn new(side0: f64, side1: f64) -> Self {
        Self { side0, side1 }
    }
}

impl Component for Rectangle {
    fn operation(&self) -> (f64, f64) {
        tracing::info!("area: {}", self.side0 * self.side1);
        (self.side0, self.side1)
    }
}

pub fn perimeter(side0: f64, side1: f64) -> f64 {
    2.0 * side0 + 2.0 * side1
}

pub fn diagonal(side0: f64, side1: f64) -> f64 {
    (side0 * side0 + side1 * side1).sqrt()
}

/// Reports the perimeter derived from the wrapped component's result, then
/// passes the result through unchanged.
pub struct PerimeterDecorator {
    component: Box<dyn Component>,
}

impl PerimeterDecorator {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for PerimeterDecorator {
    fn operation(&self) -> (f64, f64) {
        let (side0, side1) = self.component.operation();
        tracing::info!("perimeter: {}", perimeter(side0, side1));
        (side0, side1)
    }
}

/// Reports the diagonal derived from the wrapped component's result, then
/// passes the result through unchanged.
pub struct DiagonalDecorator {
    component: Box<dyn Component>,
}

impl DiagonalDecorator {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for DiagonalDecorator {
    fn operation(&self) -> (f64, f64) {
        let (side0, side1) = self.component.operation();
        tracing::info!("diagonal: {}", diagonal(side0, side1));
        (side0, side1)
    }
}

#[cfg(test)]
mod tests {
    use crate::decorator::{diagonal, perimeter, Component, DiagonalDecorator, PerimeterDecorator, Rectangle};

    #[test]
    fn base_yields_sides() {
        let c = Rectangle::new(3.0, 4.0);
        assert_eq!(c.operation(), (3.0, 4.0));
    }

    #[test]
    fn chain_passes_result_through() {
        let c = DiagonalDecorator::new(
            Box::new(PerimeterDecorator::new(
                Box::new(Rectangle::new(3.0, 4.0))
            ))
        );
        assert_eq!(c.operation(), (3.0, 4.0));
    }

    #[test]
    fn derived_values() {
        assert_eq!(perimeter(3.0, 4.0), 14.0);
        assert_eq!(diagonal(3.0, 4.0), 5.0);
    }
}
