//! File classification and the sidebar's file list.

use crate::error::{Error, Result};
use crate::types::StoredFile;

/// Extensions the upload control accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["jpeg", "jpg", "png", "mov", "pdf", "mp4"];

/// Icon family shown for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Image,
    Video,
    Pdf,
    Other,
}

impl FileKind {
    /// Classify by MIME type.
    pub fn from_mime(mime: &str) -> Self {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/png" => FileKind::Image,
            "video/quicktime" | "video/mp4" => FileKind::Video,
            "application/pdf" => FileKind::Pdf,
            _ => FileKind::Other,
        }
    }

    /// Classify by extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "png" => FileKind::Image,
            "mov" | "mp4" => FileKind::Video,
            "pdf" => FileKind::Pdf,
            _ => FileKind::Other,
        }
    }

    /// Classify a stored file's `type` field, which holds either a MIME
    /// type or a bare extension.
    pub fn from_type_field(value: &str) -> Self {
        if value.contains('/') {
            Self::from_mime(value)
        } else {
            Self::from_extension(value)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Image => "Image",
            FileKind::Video => "Video",
            FileKind::Pdf => "PDF",
            FileKind::Other => "File",
        }
    }
}

/// Lower-cased extension of a file name, if it has one.
pub fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Reject files the backend cannot ingest before any request is made.
pub fn check_upload(name: &str) -> Result<()> {
    match extension(name) {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(Error::InvalidInput(format!(
            "{} is not a supported file type (accepted: {})",
            name,
            ACCEPTED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Files shown in the sidebar grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLibrary {
    files: Vec<StoredFile>,
}

impl FileLibrary {
    pub fn files(&self) -> &[StoredFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replace the list with a `/get_file` response.
    pub fn replace(&mut self, files: Vec<StoredFile>) {
        self.files = files;
    }

    /// Add an entry for a file the backend just accepted.
    pub fn record_upload(&mut self, name: impl Into<String>, mime: impl Into<String>) {
        self.files.push(StoredFile {
            name: name.into(),
            url: String::new(),
            file_type: mime.into(),
        });
    }

    /// Entries whose name contains `query`, ignoring case. A blank query
    /// matches everything.
    pub fn filter(&self, query: &str) -> Vec<StoredFile> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.files.clone();
        }
        self.files
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("image/jpeg", FileKind::Image)]
    #[case("image/jpg", FileKind::Image)]
    #[case("image/png", FileKind::Image)]
    #[case("video/quicktime", FileKind::Video)]
    #[case("video/mp4", FileKind::Video)]
    #[case("application/pdf", FileKind::Pdf)]
    #[case("image/gif", FileKind::Other)]
    #[case("", FileKind::Other)]
    fn test_mime_dispatch(#[case] mime: &str, #[case] expected: FileKind) {
        assert_eq!(FileKind::from_mime(mime), expected);
    }

    #[rstest]
    #[case("pdf", FileKind::Pdf)]
    #[case(".MP4", FileKind::Video)]
    #[case("application/pdf", FileKind::Pdf)]
    #[case("docx", FileKind::Other)]
    fn test_type_field(#[case] value: &str, #[case] expected: FileKind) {
        assert_eq!(FileKind::from_type_field(value), expected);
    }

    #[rstest]
    #[case("report.PDF", true)]
    #[case("clip.mov", true)]
    #[case("notes.txt", false)]
    #[case("noextension", false)]
    #[case(".pdf", false)]
    fn test_check_upload(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(check_upload(name).is_ok(), ok);
    }

    #[test]
    fn test_library_filter() {
        let mut lib = FileLibrary::default();
        lib.record_upload("Quarterly Report.pdf", "application/pdf");
        lib.record_upload("team.png", "image/png");

        assert_eq!(lib.filter("").len(), 2);
        let hits = lib.filter("REPORT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Quarterly Report.pdf");
    }
}
