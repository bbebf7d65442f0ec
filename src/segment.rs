use std::fmt;
use std::iter::FusedIterator;

use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::char;
use nom::combinator::{map, value};
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// A single comparable piece of a version string.
///
/// Separators (anything that is not an ascii letter, an ascii digit, `~` or `^`) never show
/// up as segments, they only split runs of the same class apart: `1.2` is two `Digits`
/// segments while `12` is one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    /// A run of ascii digits, leading zeros included
    Digits(&'a str),
    /// A run of ascii letters
    Alpha(&'a str),
    /// `~`, sorts before everything including the end of the string
    Tilde,
    /// `^`, sorts after the end of the string but before any other segment
    Caret,
}

impl<'a> Segment<'a> {
    /// The text this segment was read from
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Digits(s) | Segment::Alpha(s) => s,
            Segment::Tilde => "~",
            Segment::Caret => "^",
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric() && c != '~' && c != '^'
}

fn segment(input: &str) -> IResult<&str, Segment<'_>> {
    preceded(
        take_while(is_separator),
        alt((
            value(Segment::Tilde, char('~')),
            value(Segment::Caret, char('^')),
            map(take_while1(|c: char| c.is_ascii_digit()), Segment::Digits),
            map(take_while1(|c: char| c.is_ascii_alphabetic()), Segment::Alpha),
        )),
    )
    .parse(input)
}

/// Lazily split a version string into its segments.
///
/// Every string is accepted. An empty string, or one made only of separators, yields no
/// segments at all.
pub fn tokenize(version: &str) -> Segments<'_> {
    Segments { rest: version }
}

/// Iterator returned by [`tokenize`]
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match segment(self.rest) {
            Ok((rest, segment)) => {
                self.rest = rest;
                Some(segment)
            }
            // only trailing separators (or nothing) are left
            Err(_) => {
                self.rest = "";
                None
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}
