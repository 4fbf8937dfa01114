pub mod http;
pub mod json_file;
pub mod products;
pub mod spec;
pub mod traits;
pub mod watch;

pub use http::HttpSource;
pub use json_file::JsonFileSource;
pub use products::{parse_cards, Product, ProductsResponse};
pub use spec::SourceSpec;
pub use traits::{CardSource, ChangeEvent};
pub use watch::FileWatcher;
