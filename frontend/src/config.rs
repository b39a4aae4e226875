use log::Level;

pub const BRAND_NAME: &str = "CertiSure";
pub const CONTACT_EMAIL: &str = "varshitjaiswal407@gmail.com";
pub const CONTACT_PHONE: &str = "+91 7869581407";
pub const CONTACT_LOCATION: &str = "Bhopal , Madhya Pradesh India";
pub const COPYRIGHT_YEAR: u16 = 2025;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
