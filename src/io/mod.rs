/*!
# IO

Reading and writing graphs in a plain text format:

```text
<vertexCount>
<v1> <v2> ... <vN>
<edgeCount>
<src> <dst> <weight>
...
```

Tokens are separated by arbitrary whitespace; lines starting with the comment identifier
are skipped. Vertex keys are parsed with [`FromStr`](std::str::FromStr) and written with
[`Display`](std::fmt::Display), so they must not contain whitespace.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`GraphRead`] and [`GraphWrite`] are shorthands on graphs using the default configuration.
*/

pub mod text;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use text::*;

/// Trait for types that can read graphs.
///
/// Provides a low-level method to read from any [`BufRead`] instance
/// and a convenience wrapper to read directly from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid graph.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are not a valid graph.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs.
///
/// Provides a low-level method to write to any [`Write`] instance
/// and a convenience wrapper to write directly to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for creating a [`GraphError::Malformed`]
macro_rules! malformed {
    ($info: expr) => {
        GraphError::Malformed($info.into())
    };
}

/// Shorthand for returning `Err(GraphError::Malformed)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $info : expr) => {
        if !($cond) {
            return Err(malformed!($info));
        }
    };
}

/// Tries to parse the next token of an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(malformed!(format!(
                "premature end of input when parsing {}",
                $name
            )));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(malformed!(format!(
                    "cannot parse {} from {:?}",
                    $name, token
                )));
            }
        }
    }};
}

use malformed;
use parse_next_value;
use raise_error_unless;
