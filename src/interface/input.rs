//! Parsing of the coordinates typed by the human player.
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A line that could not be parsed as an integer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidInput(pub String);

/// Parse a single (possibly signed) integer, ignoring surrounding whitespace.
/// Range checking is left to the board.
pub fn parse_index(line: &str) -> Result<i64, InvalidInput> {
    let line = line.trim();
    parse::index()(line)
        .map(|(_, value)| value)
        .map_err(|_| InvalidInput(line.to_owned()))
}

mod parse {
    use nom::character::complete::{digit1, one_of};
    use nom::combinator::{eof, map_res, opt, recognize};
    use nom::sequence::{pair, terminated};
    use nom::IResult;

    pub fn index<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, i64> {
        let number = map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
            s.parse::<i64>()
        });
        terminated(number, eof)
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a number", self.0)
    }
}

impl Error for InvalidInput {}
