use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use amf0fill::amf0::{Amf0Decoder, DecodeLimits};
use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

#[derive(Args)]
pub struct DumpArgs {
    /// Path to the AMF0 file
    input: PathBuf,

    /// Print only the kind of each value
    #[arg(long)]
    kinds: bool,

    /// Maximum nesting of objects and arrays
    #[arg(long, default_value_t = DecodeLimits::default().max_depth)]
    max_depth: usize,

    /// Maximum declared string length or element count
    #[arg(long, default_value_t = DecodeLimits::default().max_length)]
    max_length: usize,
}

impl DumpArgs {
    pub fn run(self) -> Result<()> {
        let data = fs::read(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let decoder = Amf0Decoder::with_limits(
            DecodeLimits::default()
                .with_max_depth(self.max_depth)
                .with_max_length(self.max_length),
        );

        let mut cursor = data.as_slice();
        let mut out = io::stdout().lock();
        let mut index = 0usize;
        while !cursor.is_empty() {
            let offset = data.len() - cursor.len();
            let value = decoder
                .decode_from(&mut cursor)
                .with_context(|| format!("failed to decode value {index} at byte offset {offset}"))?;
            if self.kinds {
                writeln!(out, "{index}: {}", value.kind())?;
            } else {
                writeln!(out, "{index}: {value}")?;
            }
            index += 1;
        }

        debug!(values = index, bytes = data.len(), "dump finished");
        Ok(())
    }
}
