//! Basis and point literals
//!
//! Reads vectors from JSON array literals such as `[[1, 0, 3], [0, 1, 5]]`.
//! This is the one place untyped input enters the crate, so the basis type
//! and integrality checks that typed constructors get for free happen here.
//! Numbers are kept at arbitrary precision; `2.0` and `1e3` are rejected as
//! non-integers rather than truncated.

use crate::error::{LatticeError, Result};
use crate::lattice::IntegerLattice;
use crate::vector::Vector;
use num_bigint::BigInt;
use serde_json::Value;
use std::str::FromStr;

/// Parse a basis literal and build the lattice it spans
///
/// Checks run over the whole basis in order: every element is an array
/// ([`LatticeError::InvalidBasisType`]), every array has the first one's
/// length ([`LatticeError::DimensionMismatch`]), every coordinate is an
/// integer ([`LatticeError::NonIntegerBasis`]).
pub fn parse_basis(input: &str) -> Result<IntegerLattice> {
    let value: Value = serde_json::from_str(input)?;
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(LatticeError::InvalidBasisType {
                index: 0,
                found: kind(&other),
            })
        }
    };

    let rows = elements
        .iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::Array(row) => Ok(row),
            other => Err(LatticeError::InvalidBasisType {
                index,
                found: kind(other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    let first = rows.first().ok_or(LatticeError::EmptyBasis)?;
    let n = first.len();
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(LatticeError::DimensionMismatch {
            index,
            expected: n,
            actual: row.len(),
        });
    }

    let basis = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.iter()
                .enumerate()
                .map(|(coordinate, x)| {
                    integer(x).ok_or_else(|| LatticeError::NonIntegerBasis {
                        index,
                        coordinate,
                        value: x.to_string(),
                    })
                })
                .collect::<Result<Vector<BigInt>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    IntegerLattice::new(basis)
}

/// Parse a single integer vector literal such as `[-4, 30, -14]`
pub fn parse_point(input: &str) -> Result<Vector<BigInt>> {
    let value: Value = serde_json::from_str(input)?;
    let coords = match value {
        Value::Array(coords) => coords,
        other => {
            return Err(LatticeError::InvalidBasisType {
                index: 0,
                found: kind(&other),
            })
        }
    };

    coords
        .iter()
        .enumerate()
        .map(|(coordinate, x)| {
            integer(x).ok_or_else(|| LatticeError::NonIntegerPoint {
                coordinate,
                value: x.to_string(),
            })
        })
        .collect()
}

/// Exact integer value of a JSON number written without fraction or exponent
fn integer(value: &Value) -> Option<BigInt> {
    match value {
        Value::Number(n) => BigInt::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
