mod asset;
mod length;
mod work_area;

#[doc(inline)]
pub use asset::AssetGeometry;
#[doc(inline)]
pub use asset::GeometryKind;
#[doc(inline)]
pub use length::Length;
#[doc(inline)]
pub use length::LengthUnit;
#[doc(inline)]
pub use work_area::WorkArea;
