//! JSONL output for simulation records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulator::MatchRecord;

pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: &str) -> Result<Self, std::io::Error> {
        let dir = Path::new(output_dir);
        fs::create_dir_all(dir)?;
        let path = dir.join("simulation.jsonl");
        let file = File::create(&path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_record(&mut self, record: &MatchRecord) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), std::io::Error> {
        self.writer.flush()
    }
}
