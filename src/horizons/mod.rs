//! # JPL Horizons access
//!
//! Everything between the Horizons API and an [`EphemerisRecord`](record::EphemerisRecord):
//!
//! * [`bodies`] – the fixed set of bodies and their Horizons identifiers.
//! * [`request`] – query construction and the HTTP call.
//! * [`download`] – batch fetch of all bodies into a data directory.
//! * [`source`] – lookup of stored or in-memory responses by identifier.
//! * [`record`] – the parsed record and the column layout of a response row.
//! * [`parser`] – ordered batch parsing over a source.

pub mod bodies;
pub mod download;
pub mod parser;
pub mod record;
pub mod request;
pub mod source;
