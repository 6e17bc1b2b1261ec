mod segment;

#[doc(inline)]
pub use segment::Segment;
