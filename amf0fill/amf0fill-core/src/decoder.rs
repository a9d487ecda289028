//! Value decoder contract used by record fillers.

use crate::value::Value;

/// Reads one complete tagged value from a byte source per call.
///
/// Implementations advance `source` past the value they return and report
/// malformed bytes or exhaustion as `Err`. Callers never retry.
pub trait ValueDecoder<R: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&mut self, source: &mut R) -> Result<Value, Self::Error>;
}

impl<R: ?Sized, D: ValueDecoder<R> + ?Sized> ValueDecoder<R> for &mut D {
    type Error = D::Error;

    fn decode(&mut self, source: &mut R) -> Result<Value, Self::Error> {
        (**self).decode(source)
    }
}

/// Adapts a plain function or closure into a [`ValueDecoder`].
#[derive(Debug, Clone, Copy)]
pub struct FnDecoder<F>(pub F);

impl<R, F, E> ValueDecoder<R> for FnDecoder<F>
where
    R: ?Sized,
    F: FnMut(&mut R) -> Result<Value, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn decode(&mut self, source: &mut R) -> Result<Value, Self::Error> {
        (self.0)(source)
    }
}
