use crate::error::{NotesError, Result};
use crate::normalization;

/// Document formats the upload form accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    PowerPoint,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(DocumentKind::Pdf),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentKind::Word)
            }
            "application/vnd.ms-powerpoint"
            | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Some(DocumentKind::PowerPoint)
            }
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Word => "Word",
            DocumentKind::PowerPoint => "PowerPoint",
        }
    }
}

/// A file picked in the browser: name, MIME type, size in bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Guess the MIME type from the extension, for hosts that only expose
    /// a name and size. Unknown extensions get an empty type and are rejected
    /// by [`UploadDraft::add_files`].
    pub fn from_name(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime = match ext.as_str() {
            "pdf" => "application/pdf",
            "doc" => "application/msword",
            "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "ppt" => "application/vnd.ms-powerpoint",
            "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "",
        };
        Self::new(name, mime, size)
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_mime(&self.mime)
    }
}

/// "1023 B", "1.5 KB", "2.0 MB".
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Tabs of the upload modal, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStep {
    #[default]
    Files,
    Details,
    Preview,
}

/// Form state of the upload modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub step: UploadStep,
    pub files: Vec<SelectedFile>,
    pub cover_image: Option<SelectedFile>,
    pub title: String,
    pub subject: String,
    pub university: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_private: bool,
}

impl UploadDraft {
    /// Keep accepted documents. If anything was dropped the returned
    /// validation error is meant for a toast; accepted files are kept either way.
    pub fn add_files(&mut self, selected: Vec<SelectedFile>) -> Result<()> {
        let before = selected.len();
        let accepted: Vec<SelectedFile> =
            selected.into_iter().filter(|f| f.kind().is_some()).collect();
        let rejected = before - accepted.len();
        self.files.extend(accepted);
        if rejected > 0 {
            tracing::warn!("Dropped {} file(s) with unsupported type", rejected);
            return Err(NotesError::validation(
                "Invalid file type",
                "Only PDF, Word, and PowerPoint files are accepted",
            ));
        }
        Ok(())
    }

    pub fn remove_file(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn set_cover_image(&mut self, file: SelectedFile) -> Result<()> {
        if !file.mime.starts_with("image/") {
            return Err(NotesError::validation(
                "Invalid file type",
                "Please select an image file for the cover",
            ));
        }
        self.cover_image = Some(file);
        Ok(())
    }

    pub fn remove_cover_image(&mut self) {
        self.cover_image = None;
    }

    /// Trimmed, non-empty, not already present. Returns whether it was added.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = normalization::canonical_tag(raw);
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Advance one tab, validating the current one first.
    pub fn next_step(&mut self) -> Result<()> {
        match self.step {
            UploadStep::Files => {
                if self.files.is_empty() {
                    return Err(NotesError::validation(
                        "No files selected",
                        "Please upload at least one file to continue",
                    ));
                }
                self.step = UploadStep::Details;
            }
            UploadStep::Details => {
                if self.title.trim().is_empty() || self.subject.trim().is_empty() {
                    return Err(NotesError::validation(
                        "Missing information",
                        "Please provide a title and subject to continue",
                    ));
                }
                self.title = normalization::canonical_title(&self.title);
                self.step = UploadStep::Preview;
            }
            UploadStep::Preview => {}
        }
        Ok(())
    }

    pub fn previous_step(&mut self) {
        self.step = match self.step {
            UploadStep::Files | UploadStep::Details => UploadStep::Files,
            UploadStep::Preview => UploadStep::Details,
        };
    }

    /// Whether the draft may be handed to the upload progress ramp.
    pub fn is_ready(&self) -> bool {
        self.step == UploadStep::Preview
            && !self.files.is_empty()
            && !self.title.trim().is_empty()
            && !self.subject.trim().is_empty()
    }
}
