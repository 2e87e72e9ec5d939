// Fixtures for writing throwaway Parquet catalogs.
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;
use tempfile::TempDir;

/// 2024-01-01T00:00:00Z in milliseconds.
pub const JAN_2024_MS: i64 = 1_704_067_200_000;
pub const NS_PER_MS: i64 = 1_000_000;

/// A catalog root in a fresh temp directory, removed when dropped.
pub struct TempCatalog {
    dir: TempDir,
}

impl TempCatalog {
    pub fn new(tag: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("sigcorr-parquet-{tag}-"))
            .tempdir()
            .unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create `root/<instrument>/<category>/` and return it.
    pub fn category_dir(&self, instrument: &str, category: &str) -> PathBuf {
        let dir = self.root().join(instrument).join(category);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `df` to `root/<instrument>/<category>/<file>`.
    pub fn write(&self, instrument: &str, category: &str, file: &str, df: &mut DataFrame) {
        let path = self.category_dir(instrument, category).join(file);
        let out = File::create(path).unwrap();
        ParquetWriter::new(out).finish(df).unwrap();
    }
}

/// Millisecond datetime column named `name`.
pub fn datetime_ms(name: &str, ms: &[i64]) -> Column {
    Series::new(name.into(), ms)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .unwrap()
        .into_column()
}

/// A frame with an `event-time` datetime column and one `f64` column per entry.
pub fn frame(times_ms: &[i64], columns: &[(&str, &[Option<f64>])]) -> DataFrame {
    let mut cols = vec![datetime_ms("event-time", times_ms)];
    for (name, values) in columns {
        cols.push(Series::new((*name).into(), *values).into_column());
    }
    DataFrame::new(cols).unwrap()
}
