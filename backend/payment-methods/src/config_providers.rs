pub mod ideal_processing;
pub use self::ideal_processing::IdealProcessingConfig;

pub mod p24;
pub use self::p24::P24Config;
