use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A capture modality the chooser can offer alongside generic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureKind {
    Image,
    Video,
}

impl CaptureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureKind::Image => "image",
            CaptureKind::Video => "video",
        }
    }
}

impl Display for CaptureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which capture modalities an upload request accepts.
///
/// Derived by the host from the renderer's accept hints; this crate takes the
/// two booleans at face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcceptSet {
    pub image: bool,
    pub video: bool,
}

impl AcceptSet {
    pub fn new(image: bool, video: bool) -> Self {
        Self { image, video }
    }

    /// Accepted kinds in presentation order: image first, then video.
    pub fn kinds(&self) -> Vec<CaptureKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.image {
            kinds.push(CaptureKind::Image);
        }
        if self.video {
            kinds.push(CaptureKind::Video);
        }
        kinds
    }
}
