use crate::error::CarouselError;

pub type CarouselResult<T> = Result<T, CarouselError>;
