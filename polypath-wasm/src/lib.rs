use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logger;

#[wasm_bindgen]
pub struct Path { pub(crate) inner: polypath::Path }

impl Path {
    pub fn rs_new() -> Path { Path { inner: polypath::Path::new() } }
    pub fn rs_inner(&self) -> &polypath::Path { &self.inner }
}

impl From<polypath::Path> for Path {
    fn from(inner: polypath::Path) -> Self { Path { inner } }
}

/// Several paths moved, fitted and mirrored as one shape.
#[wasm_bindgen]
pub struct PathGroup { pub(crate) inner: Vec<polypath::Path> }

impl PathGroup {
    pub fn rs_new() -> PathGroup { PathGroup { inner: Vec::new() } }
}
