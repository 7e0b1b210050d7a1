/// Moteur d'encodage Braille six points pour sixdot.
///
/// Turns ASCII text into Braille cells, then renders them as bit-strings or
/// Unicode Braille Patterns.
pub mod batch;
pub mod encoder;
pub mod render;

pub use encoder::{Cells, Encoder, cells, encode};
