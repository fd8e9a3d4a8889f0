//! Decorative proximity lines drawn behind the skills grid.
//!
//! Geometry is pure; drawing goes through [`LineSurface`] so the effect can
//! be stubbed out entirely outside a browser.

/// Pairs of cards farther apart than this are not linked.
pub const CARD_LINK_DISTANCE: f64 = 250.0;
/// Cards farther than this from the pointer are not linked to it.
pub const POINTER_LINK_DISTANCE: f64 = 200.0;
/// Phase advance per animation frame.
pub const FRAME_TIME_STEP: f64 = 0.01;

const LINE_RGB: (u8, u8, u8) = (209, 226, 157);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub opacity: f64,
    pub width: f64,
}

impl Segment {
    pub fn stroke_style(&self) -> String {
        let (r, g, b) = LINE_RGB;
        format!("rgba({r}, {g}, {b}, {})", self.opacity)
    }
}

/// Something lines can be drawn onto.
pub trait LineSurface {
    fn clear(&self);
    fn stroke(&self, segment: &Segment);
}

/// Surface that drops every call, for non-graphical environments.
pub struct NullSurface;

impl LineSurface for NullSurface {
    fn clear(&self) {}
    fn stroke(&self, _segment: &Segment) {}
}

/// Compute every line for one frame. `time` drives the pulsing opacity of
/// card-to-card links. A pointer outside the canvas can be passed as `None`.
pub fn frame_segments(centers: &[Point], pointer: Option<Point>, time: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    if centers.len() < 2 {
        return segments;
    }
    for (i, from) in centers.iter().enumerate() {
        for (j, to) in centers[i + 1..].iter().enumerate() {
            let distance = from.distance(to);
            if distance < CARD_LINK_DISTANCE {
                let fade = (1.0 - distance / CARD_LINK_DISTANCE) * 0.15;
                let pulse = (time + i as f64 + j as f64).sin() * 0.05 + 0.15;
                segments.push(Segment {
                    from: *from,
                    to: *to,
                    opacity: fade + pulse,
                    width: 1.0,
                });
            }
        }

        if let Some(pointer) = pointer {
            let distance = from.distance(&pointer);
            if distance < POINTER_LINK_DISTANCE {
                segments.push(Segment {
                    from: *from,
                    to: pointer,
                    opacity: (1.0 - distance / POINTER_LINK_DISTANCE) * 0.3,
                    width: 1.5,
                });
            }
        }
    }
    segments
}

/// New backing-store size for a canvas laid out at `width` x `height`, or
/// `None` when `current` already matches.
pub fn backing_size(current: (u32, u32), width: f64, height: f64) -> Option<(u32, u32)> {
    let wanted = (width.max(0.0).round() as u32, height.max(0.0).round() as u32);
    (wanted != current).then_some(wanted)
}

/// Clear the surface and draw one frame.
pub fn render_frame<S: LineSurface + ?Sized>(
    surface: &S,
    centers: &[Point],
    pointer: Option<Point>,
    time: f64,
) -> usize {
    surface.clear();
    let segments = frame_segments(centers, pointer, time);
    for segment in &segments {
        surface.stroke(segment);
    }
    segments.len()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        clears: RefCell<usize>,
        lines: RefCell<Vec<Segment>>,
    }

    impl LineSurface for Recorder {
        fn clear(&self) {
            *self.clears.borrow_mut() += 1;
        }
        fn stroke(&self, segment: &Segment) {
            self.lines.borrow_mut().push(*segment);
        }
    }

    #[test]
    fn test_single_card_draws_nothing() {
        let centers = [Point::new(10.0, 10.0)];
        assert!(frame_segments(&centers, Some(Point::new(12.0, 12.0)), 0.0).is_empty());
    }

    #[test]
    fn test_links_only_close_pairs() {
        let centers = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(1000.0, 0.0),
        ];
        let segments = frame_segments(&centers, None, 0.0);
        assert_eq!(segments.len(), 1);
        let s = segments[0];
        assert_eq!(s.from, centers[0]);
        assert_eq!(s.to, centers[1]);
        // fade (1 - 100/250) * 0.15 plus pulse sin(0) * 0.05 + 0.15
        assert!((s.opacity - (0.09 + 0.15)).abs() < 1e-9);
        assert_eq!(s.width, 1.0);
    }

    #[test]
    fn test_pointer_links() {
        let centers = [Point::new(0.0, 0.0), Point::new(600.0, 0.0)];
        let pointer = Point::new(0.0, 100.0);
        let segments = frame_segments(&centers, Some(pointer), 0.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].to, pointer);
        assert!((segments[0].opacity - 0.15).abs() < 1e-9);
        assert_eq!(segments[0].width, 1.5);
    }

    #[test]
    fn test_render_frame_clears_then_strokes() {
        let recorder = Recorder::default();
        let centers = [Point::new(0.0, 0.0), Point::new(30.0, 40.0)];
        let drawn = render_frame(&recorder, &centers, None, 1.0);
        assert_eq!(drawn, 1);
        assert_eq!(*recorder.clears.borrow(), 1);
        assert_eq!(recorder.lines.borrow().len(), 1);

        assert_eq!(render_frame(&NullSurface, &centers, None, 1.0), 1);
    }

    #[test]
    fn test_stroke_style() {
        let s = Segment {
            from: Point::default(),
            to: Point::default(),
            opacity: 0.25,
            width: 1.0,
        };
        assert_eq!(s.stroke_style(), "rgba(209, 226, 157, 0.25)");
    }

    #[test]
    fn test_backing_size_only_changes_on_resize() {
        assert_eq!(backing_size((0, 0), 800.0, 600.0), Some((800, 600)));
        assert_eq!(backing_size((800, 600), 800.0, 600.0), None);
        assert_eq!(backing_size((800, 600), 800.4, 599.6), None);
        assert_eq!(backing_size((800, 600), 1024.0, 600.0), Some((1024, 600)));
        assert_eq!(backing_size((10, 10), -5.0, f64::NAN), Some((0, 0)));
    }
}
