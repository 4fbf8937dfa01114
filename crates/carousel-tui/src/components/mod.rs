pub mod banner;
pub mod card_view;

pub use banner::{Banner, BannerVariant};
pub use card_view::{render_card, wrap_text, CardSpan};
