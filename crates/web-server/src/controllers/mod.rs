pub mod potion;
pub mod qualite;

pub use potion::PotionController;
pub use qualite::QualiteController;
