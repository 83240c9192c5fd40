use std::error::Error;
use std::fmt;

use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug)]
pub enum SessionError {
    Config(MandelbrotError),
    Viewport(ViewportError),
    Sink(std::io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid render settings: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Sink(err) => write!(f, "frame sink error: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for SessionError {
    fn from(err: MandelbrotError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Sink(err)
    }
}
