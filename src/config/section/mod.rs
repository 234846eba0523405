//! Configuration section definitions.

mod locale;
mod serve;
mod site;

pub use locale::LocaleSection;
pub use serve::ServeSection;
pub use site::SiteSection;
