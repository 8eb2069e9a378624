mod catalog_port;
mod view_port;

pub use catalog_port::CatalogPort;
pub use view_port::{InputField, View};
