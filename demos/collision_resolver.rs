use flat_collider::shape::{Canvas, Point};
use flat_collider::{CircleCollider, Collide, Collider, ColliderError};

// Prints circles instead of drawing them
struct TextCanvas;

impl Canvas for TextCanvas {
    fn circle(&mut self, center: Point, radius: f32) {
        println!("  circle at ({:.2}, {:.2}) r={:.2}", center.x, center.y, radius);
    }
}

fn main() -> Result<(), ColliderError> {
    env_logger::init();

    // Pile up circles around the origin
    let mut circles = Vec::with_capacity(20);
    for _ in 0..20 {
        circles.push(CircleCollider::new(
            [10.0 * fastrand::f32() - 5.0, 10.0 * fastrand::f32() - 5.0],
            1.0 + fastrand::f32(),
            [0.0, 0.0],
        )?);
    }

    for step in 0..50 {
        let pushed = resolve_step(&mut circles);
        println!("step {}: {} overlaps resolved", step, pushed);
        if pushed == 0 {
            break;
        }
    }

    let mut canvas = TextCanvas;
    for c in &circles {
        c.draw(&mut canvas);
    }

    Ok(())
}

// Moves each circle halfway out of every circle it overlaps
fn resolve_step(circles: &mut [CircleCollider]) -> usize {
    let mut pushed = 0;
    for i in 0..circles.len() {
        for j in 0..circles.len() {
            if i == j {
                continue;
            }
            let other = circles[j];
            let c = &mut circles[i];
            if c.overlap(&other) {
                let d = c.collide(&other);
                c.translate(d * 0.5);
                pushed += 1;
            }
        }
    }
    pushed
}
