//! Screen logic for a travel-assistance app: a location-aware hospital
//! finder and a static safety-guideline category picker, sharing a small
//! view-state store consumed by sibling screens.

pub mod config;
pub mod controller;
pub mod kakao;
pub mod location;
pub mod model;
pub mod routing;
pub mod state;
