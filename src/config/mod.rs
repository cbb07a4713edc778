//! Configuration module

mod site;

pub use site::BrokenLinkPolicy;
pub use site::HeroConfig;
pub use site::MarqueeConfig;
pub use site::SiteConfig;
