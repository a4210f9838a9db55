//! Configuration module

mod site;

pub use site::AssetRoute;
pub use site::ContentConfig;
pub use site::SiteConfig;
pub use site::{Education, Experience, PersonalInfo, Position, SiteInfo, Skills, SocialLinks};
pub use site::SpokenLanguage;
