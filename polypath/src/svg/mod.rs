//! SVG path data (`d` attribute) codec.
//!
//! Supported commands: `M L H V C S Q T Z` in absolute and relative form.
//! Elliptical arcs (`A`/`a`) are read past without producing geometry.

pub mod lexer;
pub mod parse;
pub mod write;
