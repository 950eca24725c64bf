/// OBJ parser for the wireframe subset: `v` and `l` statements
///
/// Only geometry relevant to line drawing is read: `v x y z` vertices and
/// `l a b ...` polylines (1-based indices, split into two-point segments).
/// Comments and any other statements (`vn`, `f`, `usemtl`, ...) are skipped.
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, multispace0, multispace1},
    combinator::{map_res, opt},
    multi::separated_list1,
    number::complete::float,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use nalgebra::Point3;

use crate::geometry::{Wireframe, WireframeError};

#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("line {0}: malformed statement: {1}")]
    Malformed(usize, String),
    #[error("line {0}: OBJ indices are 1-based, found 0")]
    ZeroIndex(usize),
    #[error("line {0}: a line element needs at least two points")]
    ShortLineElement(usize),
    #[error("invalid wireframe: {0}")]
    Wireframe(#[from] WireframeError),
}

/// Parse OBJ text into a validated wireframe.
pub fn parse_obj(input: &str) -> Result<Wireframe, ObjError> {
    let mut vertices: Vec<Point3<f32>> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let number = number + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("v ") || line == "v" {
            let (_, (x, y, z)) = parse_vertex(line)
                .map_err(|_| ObjError::Malformed(number, raw.to_string()))?;
            vertices.push(Point3::new(x, y, z));
        } else if line.starts_with("l ") || line == "l" {
            let (_, indices) = parse_line_element(line)
                .map_err(|_| ObjError::Malformed(number, raw.to_string()))?;
            if indices.len() < 2 {
                return Err(ObjError::ShortLineElement(number));
            }
            if indices.contains(&0) {
                return Err(ObjError::ZeroIndex(number));
            }
            for pair in indices.windows(2) {
                edges.push((pair[0] - 1, pair[1] - 1));
            }
        }
        // Anything else (vn, vt, f, o, g, s, mtllib, usemtl) is not wireframe data
    }

    Ok(Wireframe::new(vertices, edges)?)
}

fn parse_vertex(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    // An optional w coordinate is tolerated and ignored
    Ok((input, (x, y, z)))
}

fn parse_line_element(input: &str) -> IResult<&str, Vec<usize>> {
    let (input, _) = tag("l")(input)?;
    let (input, indices) = preceded(multispace0, separated_list1(multispace1, parse_index))(input)?;
    Ok((input, indices))
}

fn parse_index(input: &str) -> IResult<&str, usize> {
    let (input, index) = map_res(digit1, str::parse::<usize>)(input)?;
    // `l` statements may carry a texture index as v/vt; drop it
    let (input, _) = opt(preceded(tag("/"), digit1))(input)?;
    Ok((input, index))
}
