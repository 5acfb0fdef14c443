mod category;
mod place;
mod route;

pub use category::{Category, DISASTER_CATEGORIES};
pub use place::{Coordinate, Place};
pub use route::RoutePath;
