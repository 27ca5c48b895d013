pub mod cartesian;
pub mod cylindrical;
pub mod spherical;

pub use cartesian::Cartesian3;
pub use cylindrical::Cylindrical;
pub use spherical::Spherical;
