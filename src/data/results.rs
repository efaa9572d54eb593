use crate::engines::generation::chromosome::Chromosome;
use crate::engines::generation::evolution_engine::GenerationResult;
use crate::engines::generation::progress::ProgressCallback;
use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Result sink: one `<chromosome>\t<fitness>` line per generation.
///
/// Every line is flushed as it is written, so a run stopped early leaves
/// the generations already reported on disk.
pub struct ResultWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl ResultWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P, append: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    pub fn write_result<C: Chromosome>(&mut self, result: &GenerationResult<C>) -> Result<()> {
        writeln!(self.writer, "{}\t{}", result.best, result.fitness)?;
        self.writer.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<C: Chromosome, W: Write> ProgressCallback<C> for ResultWriter<W> {
    fn on_generation_complete(&mut self, result: &GenerationResult<C>) -> Result<()> {
        self.write_result(result)
    }
}
