//! Print area, perimeter, angles and regularity for a handful of shapes.
//!
//! Construction events are logged at debug level through the fmt subscriber.

use anyhow::Result;
use shapes::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let shapes: Vec<AnyShape> = vec![
        Rectangle::new(Point::new(0.0, 0.0), Point::new(4.0, 3.0)).into(),
        Square::new(Point::new(0.0, 0.0), 5.0).into(),
        Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)).into(),
        Triangle::right(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0))?.into(),
        Triangle::equilateral(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.7320508075688774),
        )?
        .into(),
    ];

    for s in &shapes {
        println!(
            "kind={} area={:.6} perimeter={:.6} regular={} angles={:?}",
            s.kind_name(),
            s.area()?,
            s.perimeter(),
            s.is_regular(),
            s.inner_angles()
        );
    }

    match Triangle::scalene(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)) {
        Ok(_) => println!("unexpected: isosceles input accepted as scalene"),
        Err(e) => println!("rejected: {e}"),
    }
    Ok(())
}
