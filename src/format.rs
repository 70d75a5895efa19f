//! Result templates.
//!
//! A template is plain text with `%` directives:
//!
//! | directive | expands to          |
//! |-----------|---------------------|
//! | `%f`      | file name           |
//! | `%l`      | number of lines     |
//! | `%c`      | number of columns   |
//! | `%%`      | a literal `%`       |
//!
//! Any other directive is not an error, it is rendered as `{%x=ERROR}`, so
//! every string is a valid template.

use std::{convert::Infallible, fmt::Write as _};

use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{anychar, char},
    combinator::{eof, map},
    multi::many0,
    sequence::preceded,
};

use crate::files::Report;

type IResult<'s, O> = nom::IResult<&'s str, O>;

pub const DEFAULT_TEMPLATE: &str = "%c x %l";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Name,
    Lines,
    Columns,
    Percent,
    /// Unknown directive, `None` for a `%` at the very end of the template.
    Invalid(Option<char>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

/// Which fields to show when no explicit template is given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub name: bool,
    pub lines: bool,
    pub columns: bool,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            tokens: vec![
                Token::Columns,
                Token::Literal(" x ".to_string()),
                Token::Lines,
            ],
        }
    }
}

impl Template {
    pub fn parse(content: &str) -> Self {
        let (rest, mut tokens) = match many0(token)(content) {
            Ok(parsed) => parsed,
            Err(_) => (content, Vec::new()),
        };
        // many0 only stops at end of input, any remainder is kept as text
        if !rest.is_empty() {
            tokens.push(Token::Literal(rest.to_string()));
        }
        Self { tokens }
    }

    /// Builds a template showing the selected fields, in the order name, lines,
    /// columns, separated by spaces. Selecting nothing gives the default template.
    pub fn from_fields(fields: Fields) -> Self {
        let selected = [
            (fields.name, Token::Name),
            (fields.lines, Token::Lines),
            (fields.columns, Token::Columns),
        ];

        let mut tokens = Vec::new();
        for (_, field) in selected.into_iter().filter(|(show, _)| *show) {
            if !tokens.is_empty() {
                tokens.push(Token::Literal(" ".to_string()));
            }
            tokens.push(field);
        }

        if tokens.is_empty() {
            Self::default()
        } else {
            Self { tokens }
        }
    }

    pub fn render(&self, report: &Report) -> String {
        let mut buffer = String::new();
        for token in self.tokens.iter() {
            // writing into a String cannot fail
            let _ = match token {
                Token::Literal(text) => write!(buffer, "{text}"),
                Token::Name => write!(buffer, "{}", report.name),
                Token::Lines => write!(buffer, "{}", report.bounds.lines),
                Token::Columns => write!(buffer, "{}", report.bounds.columns),
                Token::Percent => write!(buffer, "%"),
                Token::Invalid(Some(c)) => write!(buffer, "{{%{c}=ERROR}}"),
                Token::Invalid(None) => write!(buffer, "{{%=ERROR}}"),
            };
        }
        buffer
    }

    pub fn write_line(&self, out: &mut impl std::io::Write, report: &Report) -> std::io::Result<()> {
        writeln!(out, "{}", self.render(report))
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in self.tokens.iter() {
            match token {
                Token::Literal(text) => write!(f, "{text}")?,
                Token::Name => write!(f, "%f")?,
                Token::Lines => write!(f, "%l")?,
                Token::Columns => write!(f, "%c")?,
                Token::Percent => write!(f, "%%")?,
                Token::Invalid(Some(c)) => write!(f, "%{c}")?,
                Token::Invalid(None) => write!(f, "%")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn token(input: &str) -> IResult<'_, Token> {
    alt((
        map(is_not("%"), |text: &str| Token::Literal(text.to_string())),
        preceded(char('%'), directive),
    ))(input)
}

fn directive(input: &str) -> IResult<'_, Token> {
    alt((
        map(anychar, |c| match c {
            'f' => Token::Name,
            'l' => Token::Lines,
            'c' => Token::Columns,
            '%' => Token::Percent,
            other => Token::Invalid(Some(other)),
        }),
        map(eof, |_| Token::Invalid(None)),
    ))(input)
}
