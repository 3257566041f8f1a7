use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, multispace0, not_line_ending, space1};
use nom::combinator::{map_res, opt};
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::compact_instance::CompactInstance;
use crate::error::{ColorError, Result};


/// reads a DIMACS instance from a file
pub fn from_file(filename:&str) -> Result<CompactInstance> {
    let (n, edges) = read_from_file(filename)?;
    CompactInstance::from_edges(n, &edges)
}

/// reads an instance from file, returns (n, edges) with 0-based endpoints
pub fn read_from_file(filename:&str) -> Result<(usize, Vec<(usize,usize)>)> {
    let content = fs::read_to_string(filename)
        .map_err(|source| ColorError::Io { path: filename.to_string(), source })?;
    parse(content.replace("\r", "").as_str())
}

/// parses the content of a DIMACS file, returns (n, edges) with 0-based endpoints
pub fn parse(s:&str) -> Result<(usize, Vec<(usize,usize)>)> {
    let (s2,_) = skip_comments(s).map_err(parse_error)?;
    let (mut s3,(n,m)) = read_header(s2).map_err(parse_error)?;
    let mut edges = Vec::with_capacity(m);
    loop {
        let (tmp,_) = skip_comments(s3).map_err(parse_error)?;
        match read_edge(tmp) {
            Ok((tmp2,(a,b))) => {
                for v in &[a,b] { // WARNING: indices start at 1 in the DIMACS format
                    if *v == 0 || *v > n {
                        return Err(ColorError::VertexOutOfRange { vertex:*v, n });
                    }
                }
                edges.push((a-1, b-1));
                s3 = tmp2;
            }
            Err(_) => break
        }
    }
    if edges.len() != m && 2*edges.len() != m {
        return Err(ColorError::EdgeCountMismatch { expected:m, found:edges.len() });
    }
    Ok((n, edges))
}

fn parse_error(e:nom::Err<nom::error::Error<&str>>) -> ColorError {
    ColorError::Parse { format:"DIMACS", msg:e.to_string() }
}

/// skips a single comment
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        preceded(tag("c"), terminated(not_line_ending, opt(line_ending)))
    )(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

/// reads a non-negative integer
fn read_usize(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(space1, separated_pair(read_usize, space1, read_usize))(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        multispace0,
        preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(multispace0, preceded(tag("e"), read_two_integers))(s)
}
