pub mod ideal_processing;
pub use self::ideal_processing::IdealProcessing;

pub mod p24;
pub use self::p24::P24;
