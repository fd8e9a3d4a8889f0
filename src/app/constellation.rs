use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnOptions};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, DomRect, Element, HtmlCanvasElement};

use crate::constellation::{
    backing_size, render_frame, LineSurface, Point, Segment, FRAME_TIME_STEP,
};

/// Selector for the elements the constellation links together.
const NODE_SELECTOR: &str = ".skill-card";

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    fn attach(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

impl LineSurface for CanvasSurface {
    fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke(&self, segment: &Segment) {
        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.set_stroke_style_str(&segment.stroke_style());
        self.ctx.set_line_width(segment.width);
        self.ctx.stroke();
    }
}

fn center_in(rect: &DomRect, origin: &DomRect) -> Point {
    Point::new(
        rect.left() + rect.width() / 2.0 - origin.left(),
        rect.top() + rect.height() / 2.0 - origin.top(),
    )
}

fn node_centers(container: &Element, origin: &DomRect) -> Vec<Point> {
    let Ok(nodes) = container.query_selector_all(NODE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| center_in(&el.get_bounding_client_rect(), origin))
        .collect()
}

/// Wraps `children` with a canvas that links nearby skill cards, and the
/// pointer, with faint animated lines. Frames only run while `active`.
#[component]
pub fn Constellation(#[prop(into)] active: Signal<bool>, children: Children) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let pointer = StoredValue::new(None::<Point>);
    let time = StoredValue::new(0.0f64);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |_| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let Some(container) = canvas.parent_element() else {
                return;
            };

            // resizing reallocates the backing store, so only do it on change
            let bounds = container.get_bounding_client_rect();
            if let Some((width, height)) =
                backing_size((canvas.width(), canvas.height()), bounds.width(), bounds.height())
            {
                canvas.set_width(width);
                canvas.set_height(height);
            }

            let Some(surface) = CanvasSurface::attach(&canvas) else {
                log::debug!("2d context unavailable, skipping constellation frame");
                return;
            };
            let origin = canvas.get_bounding_client_rect();
            let centers = node_centers(&container, &origin);
            let now = time
                .try_update_value(|t| {
                    *t += FRAME_TIME_STEP;
                    *t
                })
                .unwrap_or_default();
            render_frame(&surface, &centers, pointer.get_value(), now);
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if active.get() {
            resume();
        } else {
            pause();
        }
    });

    let track = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let origin = canvas.get_bounding_client_rect();
        pointer.set_value(Some(Point::new(
            f64::from(ev.client_x()) - origin.left(),
            f64::from(ev.client_y()) - origin.top(),
        )));
    };

    view! {
        <div class="relative" on:mousemove=track on:mouseleave=move |_| pointer.set_value(None)>
            <canvas node_ref=canvas_ref class="absolute inset-0 pointer-events-none z-0" />
            <div class="relative z-10">{children()}</div>
        </div>
    }
}
