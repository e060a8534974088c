//! Core metadata derivation logic: the scene-identifier grammar, the
//! leap-second-tolerant temporal resolver, the ground-station table, band
//! discovery, the corner-point projector, and the document assembler.
pub mod bands;
pub mod document;
pub mod identifier;
pub mod projection;
pub mod stations;
pub mod temporal;
