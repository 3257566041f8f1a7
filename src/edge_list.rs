/*
Implements:
 - reading the plain edge-list format: a "n m" header line followed by m "u v" lines (0-based)
 - writing a result: "nb_colors optimal" followed by the colors of each vertex
*/
use std::fs;

use nom::IResult;
use nom::character::complete::{digit1, multispace0, space1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair};

use crate::color::Color;
use crate::compact_instance::CompactInstance;
use crate::error::{ColorError, Result};


/// reads an edge-list instance from a file
pub fn from_file(filename:&str) -> Result<CompactInstance> {
    let content = fs::read_to_string(filename)
        .map_err(|source| ColorError::Io { path: filename.to_string(), source })?;
    let (n, edges) = parse(content.as_str())?;
    CompactInstance::from_edges(n, &edges)
}

/// parses an edge-list, returns (n, edges). Content after the m-th edge is ignored.
pub fn parse(s:&str) -> Result<(usize, Vec<(usize,usize)>)> {
    let (mut remaining,(n,m)) = read_pair(s).map_err(parse_error)?;
    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let (tmp,edge) = read_pair(remaining).map_err(parse_error)?;
        edges.push(edge);
        remaining = tmp;
    }
    Ok((n, edges))
}

fn parse_error(e:nom::Err<nom::error::Error<&str>>) -> ColorError {
    ColorError::Parse { format:"edge list", msg:e.to_string() }
}

/// reads a non-negative integer
fn read_usize(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces (skips leading blanks and newlines)
fn read_pair(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(multispace0, separated_pair(read_usize, space1, read_usize))(s)
}

/** writes a string encoding the result:
first line "nb_colors optimal" (optimal is 1 or 0), second line the color of each vertex
*/
pub fn solution_to_string(colors:&[Color], nb_colors:usize, optimal:bool) -> String {
    let line:Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    format!("{} {}\n{}", nb_colors, optimal as u8, line.join(" "))
}
