use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Calendar day a file belongs to, taken from its modification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayBucket {
    date: NaiveDate,
}

impl DayBucket {
    pub fn from_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self { date: timestamp.date_naive() }
    }

    /// `YYYY`
    pub fn year_dir(&self) -> String {
        format!("{:04}", self.date.year())
    }

    /// `YYYY-MM-DD`
    pub fn day_dir(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `dest_root/YYYY/YYYY-MM-DD`
    pub fn directory(&self, dest_root: &Path) -> PathBuf {
        dest_root.join(self.year_dir()).join(self.day_dir())
    }

    /// `dest_root/YYYY/YYYY-MM-DD/file_name`
    pub fn destination(&self, dest_root: &Path, file_name: &OsStr) -> PathBuf {
        self.directory(dest_root).join(file_name)
    }
}
