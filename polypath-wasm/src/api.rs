use crate::error;
use crate::interop::{self, to_js};
use crate::{Path, PathGroup};
use js_sys::Float64Array;
use polypath::{AlignBase, Matrix, Orientation, Point, Rect, Shape};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route library log records to the browser console. `level` is one of
/// `off`, `error`, `warn`, `info`, `debug`, `trace`; anything else means `warn`.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Warn);
    crate::logger::install(filter);
}

fn rect_or_null(r: Option<Rect>) -> JsValue {
    r.and_then(|r| to_js(&r).ok()).unwrap_or(JsValue::NULL)
}

fn point_or_null(p: Option<Point>) -> JsValue {
    p.and_then(|p| to_js(&p).ok()).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
impl Path {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Path {
        crate::Path::rs_new()
    }

    // SVG path data
    pub fn parse(d: &str) -> Option<Path> {
        polypath::Path::from_svg(d).ok().map(Path::from)
    }
    pub fn parse_res(d: &str) -> JsValue {
        match polypath::Path::from_svg(d) {
            Ok(p) => error::ok(Path::from(p).into()),
            Err(e) => error::from_path_error(&e),
        }
    }
    pub fn svg(&self) -> String {
        self.inner.to_svg()
    }
    pub fn set_svg(&mut self, d: &str) -> bool {
        self.inner.set_svg(d).is_ok()
    }
    pub fn set_svg_res(&mut self, d: &str) -> JsValue {
        match self.inner.set_svg(d) {
            Ok(p) => error::ok(JsValue::from_f64(p.len() as f64)),
            Err(e) => error::from_path_error(&e),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn closed(&self) -> bool {
        self.inner.closed
    }
    #[wasm_bindgen(setter)]
    pub fn set_closed(&mut self, closed: bool) {
        self.inner.closed = closed;
    }
    pub fn point_count(&self) -> u32 {
        self.inner.len() as u32
    }
    pub fn subpath_count(&self) -> u32 {
        self.inner.subpath_count() as u32
    }

    /// Anchor positions as `[x0, y0, x1, y1, ...]`.
    pub fn positions(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.points().iter().flat_map(|a| [a.pt.x, a.pt.y]).collect();
        interop::arr_f64(&flat)
    }
    /// Anchors with their control points, `{ x, y, prev?, next?, move_to? }`.
    pub fn anchors(&self) -> JsValue {
        to_js(self.inner.points()).unwrap_or(JsValue::NULL)
    }

    // Measurement
    pub fn bound_rect(&self) -> JsValue {
        rect_or_null(self.inner.bound_rect())
    }
    pub fn center(&self) -> JsValue {
        point_or_null(self.inner.center())
    }

    // Transforms
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.inner.move_by(dx, dy);
    }
    pub fn move_by_res(&mut self, dx: f64, dy: f64) -> JsValue {
        if let Some(e) = error::check_finite(&[("dx", dx), ("dy", dy)]) {
            return e;
        }
        self.move_by(dx, dy);
        error::ok(JsValue::from_bool(true))
    }
    pub fn move_dir(&mut self, dist: f64, angle: f64) {
        self.inner.move_dir(dist, angle);
    }
    pub fn rotate(&mut self, angle: f64, px: f64, py: f64) {
        self.inner.rotate(angle, Point::new(px, py));
    }
    pub fn rotate_res(&mut self, angle: f64, px: f64, py: f64) -> JsValue {
        if let Some(e) = error::check_finite(&[("angle", angle), ("px", px), ("py", py)]) {
            return e;
        }
        self.rotate(angle, px, py);
        error::ok(JsValue::from_bool(true))
    }
    pub fn scale(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.inner.scale(sx, sy, Point::new(px, py));
    }
    pub fn scale_res(&mut self, sx: f64, sy: f64, px: f64, py: f64) -> JsValue {
        if let Some(e) = error::check_finite(&[("sx", sx), ("sy", sy), ("px", px), ("py", py)]) {
            return e;
        }
        self.scale(sx, sy, px, py);
        error::ok(JsValue::from_bool(true))
    }
    /// Apply the affine matrix `[a c e; b d f]` (SVG `matrix()` order).
    pub fn matrix_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.inner.matrix_transform(&Matrix::new(a, b, c, d, e, f));
    }
    pub fn matrix_transform_res(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> JsValue {
        let params = [("a", a), ("b", b), ("c", c), ("d", d), ("e", e), ("f", f)];
        if let Some(err) = error::check_finite(&params) {
            return err;
        }
        self.matrix_transform(a, b, c, d, e, f);
        error::ok(JsValue::from_bool(true))
    }

    // Fitting
    pub fn mirror(&mut self, orientation: &str) -> bool {
        match orientation.parse::<Orientation>() {
            Ok(o) => {
                self.inner.mirror(o);
                true
            }
            Err(_) => false,
        }
    }
    pub fn mirror_res(&mut self, orientation: &str) -> JsValue {
        match orientation.parse::<Orientation>() {
            Ok(o) => {
                self.inner.mirror(o);
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::from_path_error(&e),
        }
    }
    pub fn align(&mut self, base: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        match base.parse::<AlignBase>() {
            Ok(b) => {
                self.inner.align(b, &Rect::from_coords(x1, y1, x2, y2));
                true
            }
            Err(_) => false,
        }
    }
    pub fn align_res(&mut self, base: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> JsValue {
        let base = match base.parse::<AlignBase>() {
            Ok(b) => b,
            Err(e) => return error::from_path_error(&e),
        };
        if let Some(e) = error::check_finite(&[("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]) {
            return e;
        }
        self.inner.align(base, &Rect::from_coords(x1, y1, x2, y2));
        error::ok(JsValue::from_bool(true))
    }
    pub fn place_into_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.inner.place_into_rect(&Rect::from_coords(x1, y1, x2, y2));
    }
    pub fn place_into_rect_res(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> JsValue {
        if let Some(e) = error::check_finite(&[("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]) {
            return e;
        }
        self.place_into_rect(x1, y1, x2, y2);
        error::ok(rect_or_null(self.inner.bound_rect()))
    }
    pub fn place_around_point(&mut self, x: f64, y: f64, dist: f64) {
        self.inner.place_around_point(Point::new(x, y), dist);
    }
    pub fn place_around_point_res(&mut self, x: f64, y: f64, dist: f64) -> JsValue {
        if let Some(e) = error::check_finite(&[("x", x), ("y", y), ("dist", dist)]) {
            return e;
        }
        if dist < 0.0 {
            return error::out_of_range("dist", 0.0, f64::INFINITY, dist);
        }
        self.place_around_point(x, y, dist);
        error::ok(rect_or_null(self.inner.bound_rect()))
    }

    pub fn clone_path(&self) -> Path {
        Path::from(self.inner.clone())
    }

    // Generators
    pub fn ellipse(cx: f64, cy: f64, r1: f64, r2: f64) -> Path {
        Path::from(polypath::Path::ellipse(Point::new(cx, cy), r1, r2))
    }
    pub fn star(cx: f64, cy: f64, r1: f64, r2: f64, num_vertices: u32, offset: f64) -> Path {
        Path::from(polypath::Path::star(Point::new(cx, cy), r1, r2, num_vertices as usize, offset))
    }
    pub fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Path {
        Path::from(polypath::Path::from_rect(&Rect::from_coords(x1, y1, x2, y2)))
    }

    // JSON document
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value()).unwrap_or(JsValue::NULL)
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => match polypath::Path::from_json_value(val) {
                Ok(p) => {
                    self.inner = p;
                    true
                }
                Err(_) => false,
            },
            Err(_) => false,
        }
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("json_parse", format!("{}", e), None),
        };
        match polypath::Path::from_json_value(val) {
            Ok(p) => {
                self.inner = p;
                error::ok(JsValue::from_f64(self.inner.len() as f64))
            }
            Err(e) => error::from_path_error(&e),
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PathGroup {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PathGroup {
        crate::PathGroup::rs_new()
    }
    /// Adds a copy of `path`.
    pub fn push(&mut self, path: &Path) {
        self.inner.push(path.rs_inner().clone());
    }
    pub fn len(&self) -> u32 {
        self.inner.len() as u32
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    pub fn get(&self, index: u32) -> Option<Path> {
        self.inner.get(index as usize).cloned().map(Path::from)
    }
    pub fn svgs(&self) -> JsValue {
        let all: Vec<String> = self.inner.iter().map(|p| p.to_svg()).collect();
        to_js(&all).unwrap_or(JsValue::NULL)
    }
    pub fn bound_rect(&self) -> JsValue {
        rect_or_null(self.inner.bound_rect())
    }
    pub fn center(&self) -> JsValue {
        point_or_null(self.inner.center())
    }
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.inner.move_by(dx, dy);
    }
    pub fn rotate(&mut self, angle: f64, px: f64, py: f64) {
        self.inner.rotate(angle, Point::new(px, py));
    }
    pub fn scale(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.inner.scale(sx, sy, Point::new(px, py));
    }
    pub fn mirror(&mut self, orientation: &str) -> bool {
        match orientation.parse::<Orientation>() {
            Ok(o) => {
                self.inner.mirror(o);
                true
            }
            Err(_) => false,
        }
    }
    pub fn place_into_rect(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.inner.place_into_rect(&Rect::from_coords(x1, y1, x2, y2));
    }
    pub fn place_into_rect_res(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> JsValue {
        if let Some(e) = error::check_finite(&[("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]) {
            return e;
        }
        self.place_into_rect(x1, y1, x2, y2);
        error::ok(rect_or_null(self.inner.bound_rect()))
    }
}

impl Default for PathGroup {
    fn default() -> Self {
        Self::new()
    }
}
