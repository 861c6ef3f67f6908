use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureStoreError {
    #[error("spool directory unavailable: {0}")]
    Spool(std::io::Error),

    #[error("could not create capture output: {0}")]
    Create(std::io::Error),
}
