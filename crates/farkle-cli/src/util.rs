use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Where a JSON report goes: a file, or stdout for the path `-`.
#[derive(Debug)]
pub enum ReportSink {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl ReportSink {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        if path == Path::new("-") {
            return Ok(ReportSink::Stdout {
                writer: io::stdout().lock(),
            });
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        Ok(ReportSink::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            ReportSink::Stdout { .. } => "stdout".to_owned(),
            ReportSink::File { path, .. } => path.display().to_string(),
        }
    }

    fn writer(&mut self) -> &mut dyn io::Write {
        match self {
            ReportSink::Stdout { writer } => writer,
            ReportSink::File { writer, .. } => writer,
        }
    }

    /// Writes `value` as pretty JSON followed by a newline.
    pub fn write_json<T>(mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let target = self.display_path();
        let writer = self.writer();
        serde_json::to_writer_pretty(&mut *writer, value)
            .with_context(|| format!("Failed to write JSON report to {target}"))?;
        writeln!(writer).with_context(|| format!("Failed to write JSON report to {target}"))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush JSON report to {target}"))?;
        Ok(())
    }
}

/// Writes `value` to `path` if one was given.
pub fn save_report<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let Some(path) = path else {
        return Ok(());
    };
    let sink = ReportSink::create(path)?;
    let target = sink.display_path();
    sink.write_json(value)?;
    log::info!("report written to {target}");
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {} JSON file: {}", file_kind, path.display()))
}
