use std::{
    fmt,
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{
    bounds::{self, Bounds, ScanOptions},
    format::Template,
    source::ReaderSource,
    Error, Result,
};

pub const STDIN_ARG: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

/// Measurement of a single input, ready to be rendered by a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub bounds: Bounds,
}

impl Input {
    /// `-` denotes standard input, anything else is a path.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let arg = arg.as_ref();
        if arg.as_os_str() == STDIN_ARG {
            Input::Stdin
        } else {
            Input::Path(arg.to_path_buf())
        }
    }

    pub fn name(&self) -> String {
        match self {
            Input::Stdin => STDIN_ARG.to_string(),
            Input::Path(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Input::Stdin => Ok(Box::new(std::io::stdin().lock())),
            Input::Path(path) => match File::open(path) {
                Ok(file) => Ok(Box::new(file)),
                Err(source) => Err(Error::Open {
                    path: path.clone(),
                    source,
                }),
            },
        }
    }

    fn path(&self) -> PathBuf {
        match self {
            Input::Stdin => PathBuf::from(STDIN_ARG),
            Input::Path(path) => path.clone(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Measures an input from scratch. The input is closed before returning.
pub fn measure_input(input: &Input, options: ScanOptions) -> Result<Report> {
    log::debug!("measuring {input}");
    let mut source = ReaderSource::new(input.open()?);
    let mut bounds = Bounds::default();
    bounds::scan(&mut source, &mut bounds, options);
    if let Err(err) = source.finish() {
        return Err(Error::Read {
            path: input.path(),
            source: err,
        });
    }

    log::info!(
        "{input} : lines = {}, columns = {}",
        bounds.lines,
        bounds.columns
    );
    Ok(Report {
        name: input.name(),
        bounds,
    })
}

/// Measures every input in order, writing one rendered line per input to `out`.
///
/// Stops at the first input that cannot be opened or read. Lines for the inputs
/// before it have already been written.
pub fn measure_all<'i>(
    inputs: impl IntoIterator<Item = &'i Input>,
    options: ScanOptions,
    template: &Template,
    out: &mut impl Write,
) -> Result<()> {
    for input in inputs {
        let report = measure_input(input, options)?;
        template.write_line(out, &report)?;
    }
    out.flush()?;
    Ok(())
}
