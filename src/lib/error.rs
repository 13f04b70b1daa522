use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    AlphaOutOfRange,
    InvalidThreshold,
    ZeroPushInterval,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::AlphaOutOfRange => write!(f, "smoothing factor must be in (0, 1)"),
            ErrorCode::InvalidThreshold => {
                write!(f, "trend threshold must be finite and not negative")
            }
            ErrorCode::ZeroPushInterval => write!(f, "push interval must be at least 1"),
        }
    }
}
