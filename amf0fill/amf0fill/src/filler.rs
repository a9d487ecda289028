//! Field-by-field decode-and-assign loop.

use std::io::Read;

use amf0fill_amf0::Amf0Decoder;
use amf0fill_core::{ConversionError, Record, ValueDecoder};
use tracing::{debug, trace};

use crate::error::DecodeError;

/// Fills records from a byte source, one decoded value per field.
///
/// The filler owns the source and can be reused to read several records
/// back to back from the same stream.
pub struct Filler<R, D = Amf0Decoder> {
    source: R,
    decoder: D,
}

impl<R: Read> Filler<R> {
    /// Create a filler using the default [`Amf0Decoder`].
    pub fn new(source: R) -> Self {
        Self::with_decoder(source, Amf0Decoder::new())
    }
}

impl<R, D> Filler<R, D> {
    pub fn with_decoder(source: R, decoder: D) -> Self {
        Self { source, decoder }
    }

    pub fn get_ref(&self) -> &R {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R, D: ValueDecoder<R>> Filler<R, D> {
    /// Fill every field of `record` in declaration order.
    ///
    /// - A null or undefined value leaves an absence-capable field untouched
    ///   and fails with [`DecodeError::CannotRepresentAbsence`] otherwise.
    /// - Any other value is converted into the field's type, or fails with
    ///   [`DecodeError::TypeMismatch`].
    /// - Decoder failures are returned as [`DecodeError::Upstream`].
    ///
    /// Exactly one value is consumed per field; the first error stops the fill.
    pub fn fill<T: Record + ?Sized>(&mut self, record: &mut T) -> Result<(), DecodeError> {
        let mut slots = record.slots();
        debug!(fields = slots.len(), "filling record");

        for (field_index, slot) in slots.iter_mut().enumerate() {
            let value = self.decoder.decode(&mut self.source).map_err(|e| {
                debug!(field_index, field = slot.name, error = %e, "value decoder failed");
                DecodeError::Upstream {
                    field_index,
                    source: Box::new(e),
                }
            })?;

            let field_type = slot.field.field_type();
            let got = value.kind();

            if value.is_bodyless() {
                if !field_type.is_absence_capable() {
                    debug!(field_index, field = slot.name, %field_type, "absent value rejected");
                    return Err(DecodeError::CannotRepresentAbsence {
                        field_index,
                        field_name: slot.name,
                        field_type,
                    });
                }
                debug!(field_index, field = slot.name, kind = %got, "skipping absent value");
                continue;
            }

            let assigned = if field_type.accepts(got) {
                slot.field.assign(value)
            } else {
                Err(ConversionError::incompatible(got, field_type.clone()))
            };
            if let Err(source) = assigned {
                debug!(field_index, field = slot.name, %got, want = %field_type, "type mismatch");
                return Err(DecodeError::TypeMismatch {
                    field_index,
                    field_name: slot.name,
                    got,
                    want: field_type,
                    source,
                });
            }
            trace!(field_index, field = slot.name, kind = %got, "field assigned");
        }

        Ok(())
    }
}

/// Fill `record` from `source` with the default AMF0 decoder.
///
/// Pass `&mut reader` to keep using the reader afterwards.
pub fn decode_into<R: Read, T: Record + ?Sized>(
    source: R,
    record: &mut T,
) -> Result<(), DecodeError> {
    Filler::new(source).fill(record)
}
