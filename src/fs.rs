use std::error::Error;
use std::fs;
use std::path::Path;

use crate::parser;
use crate::puzzle::PuzzleState;
use crate::LoadLevel;

/// Used by both `LoadLevel` and the binary.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(path)?)
}

impl LoadLevel for Path {
    fn load_level(&self) -> Result<PuzzleState, Box<dyn Error>> {
        let level = read_file(self)?;
        debug!("Loaded {}", self.display());
        Ok(parser::parse(&level)?)
    }
}

impl LoadLevel for str {
    fn load_level(&self) -> Result<PuzzleState, Box<dyn Error>> {
        Path::new(self).load_level()
    }
}
