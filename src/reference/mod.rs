//! Reference markers and string interpolation
//!
//! Resources, attributes and parameters can be embedded in ordinary strings
//! through a placeholder syntax:
//!
//! ```text
//! {Resource|web}            -> {"Ref": "web"}
//! {Attribute|web|PublicIp}  -> {"Fn::GetAtt": ["web", "PublicIp"]}
//! {Parameter|AWS::Region}   -> {"Ref": "AWS::Region"}
//! ```
//!
//! Strings mixing literal text and markers become an `Fn::Join`.

mod interpolate;
pub mod lexer;
mod marker;

pub use interpolate::{interpolate, parse, Chunk};
pub use marker::Reference;
