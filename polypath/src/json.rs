use crate::geometry::limits;
use crate::path::{Anchor, Path};
use crate::PathError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_VERSION: u32 = 1;

#[derive(Serialize)]
struct PathSer<'a> {
    version: u32,
    closed: bool,
    points: &'a [Anchor],
}

#[derive(Deserialize)]
struct PathDe {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    closed: bool,
    points: Vec<Anchor>,
}

pub fn to_json_impl(p: &Path) -> Value {
    let doc = PathSer { version: DOC_VERSION, closed: p.closed, points: p.points() };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_impl(v: Value) -> Result<Path, PathError> {
    // Check the size cap before materializing anchors.
    if let Some(n) = v.get("points").and_then(Value::as_array).map(Vec::len) {
        if n > limits::MAX_PATH_POINTS {
            return Err(PathError::LimitExceeded { what: "points", limit: limits::MAX_PATH_POINTS });
        }
    }
    let doc: PathDe = serde_json::from_value(v)?;
    if let Some(ver) = doc.version {
        if ver != DOC_VERSION {
            return Err(PathError::InvalidArgument(format!("unsupported document version {}", ver)));
        }
    }
    let finite = doc
        .points
        .iter()
        .flat_map(|a| a.points())
        .all(|p| limits::in_coord_bounds(p.x) && limits::in_coord_bounds(p.y));
    if !finite {
        return Err(PathError::NonFinite);
    }
    Ok(Path::from_points(doc.points, doc.closed))
}
