use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { required: usize, actual: usize },
    InvalidStride,
    InvalidChannel { channel: usize, channels: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { required, actual } => {
                write!(f, "buffer too small: required {required}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::InvalidChannel { channel, channels } => {
                write!(f, "channel {channel} out of range for {channels} channels")
            }
        }
    }
}

impl std::error::Error for Error {}
