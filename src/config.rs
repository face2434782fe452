//! INI body-file loader.
//!
//! One section per body, in file order:
//!
//! ```ini
//! [earth]
//! cx = 1.496e11
//! cy = 0.0
//! cz = 0.0
//! vx = 0.0
//! vy = 29722.0
//! vz = 0.0
//! M  = 3.986004418e14
//! ```
//!
//! `cx cy cz` are the initial position, `vx vy vz` the initial velocity, and
//! `M` the mass already multiplied by the gravitational constant. Any key
//! left out defaults to `0.0`. A section name that appears twice refers to
//! the same body and later keys overwrite earlier ones. Unknown keys are
//! warned about and ignored; an unparseable value or a file with no bodies
//! aborts the load.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::body::Body;
use crate::vector::Vector3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("body '{body}': invalid value for '{key}': {value}")]
    InvalidValue {
        body: String,
        key: String,
        value: String,
    },

    #[error("body '{body}': mass must be >= 0, got {mass}")]
    NegativeMass { body: String, mass: f64 },

    #[error("no bodies defined")]
    NoBodies,
}

#[derive(Default)]
struct BodyFields {
    cx: f64,
    cy: f64,
    cz: f64,
    vx: f64,
    vy: f64,
    vz: f64,
    m: f64,
}

/// Load the body list from an INI file on disk.
pub fn load_file(path: &Path) -> Result<Vec<Body>, ConfigError> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

/// Parse the body list from INI text. Bodies come out in first-appearance
/// order, which fixes the reporting order for the whole run.
pub fn load_str(text: &str) -> Result<Vec<Body>, ConfigError> {
    let mut order: Vec<String> = Vec::new();
    let mut fields: Vec<BodyFields> = Vec::new();
    let mut current: Option<usize> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let lineno = lineno + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('[') {
            let name = name.strip_suffix(']').ok_or_else(|| ConfigError::Parse {
                line: lineno,
                message: format!("unterminated section header: {}", raw.trim()),
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Parse {
                    line: lineno,
                    message: "empty section name".into(),
                });
            }
            // A repeated section reopens the same body.
            current = Some(match order.iter().position(|n| n == name) {
                Some(i) => i,
                None => {
                    order.push(name.to_string());
                    fields.push(BodyFields::default());
                    order.len() - 1
                }
            });
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::Parse {
            line: lineno,
            message: format!("expected 'key = value', got: {}", raw.trim()),
        })?;
        let key = key.trim();
        let value = value.trim();

        let i = current.ok_or_else(|| ConfigError::Parse {
            line: lineno,
            message: format!("key '{}' before any [section]", key),
        })?;

        let slot = match key {
            "cx" => &mut fields[i].cx,
            "cy" => &mut fields[i].cy,
            "cz" => &mut fields[i].cz,
            "vx" => &mut fields[i].vx,
            "vy" => &mut fields[i].vy,
            "vz" => &mut fields[i].vz,
            "M" => &mut fields[i].m,
            _ => {
                log::warn!("[{}] unknown key '{}' ignored", order[i], key);
                continue;
            }
        };
        *slot = value.parse().map_err(|_| ConfigError::InvalidValue {
            body: order[i].clone(),
            key: key.to_string(),
            value: value.to_string(),
        })?;
    }

    if order.is_empty() {
        return Err(ConfigError::NoBodies);
    }

    let mut bodies = Vec::with_capacity(order.len());
    for (name, f) in order.into_iter().zip(fields) {
        if f.m < 0.0 {
            return Err(ConfigError::NegativeMass { body: name, mass: f.m });
        }
        bodies.push(Body::new(
            name,
            Vector3::new(f.cx, f.cy, f.cz),
            Vector3::new(f.vx, f.vy, f.vz),
            f.m,
        ));
    }
    Ok(bodies)
}

fn strip_comment(line: &str) -> &str {
    match line.find(|c| c == ';' || c == '#') {
        Some(i) => &line[..i],
        None => line,
    }
}
