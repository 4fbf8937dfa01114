pub mod config;
pub mod error;
pub mod result;

pub use config::{
    AnimationConfig, CarouselConfig, GestureConfig, LayoutConfig, NavigationConfig,
    SameDotPolicy, SourceConfig,
};
pub use error::CarouselError;
pub use result::CarouselResult;
