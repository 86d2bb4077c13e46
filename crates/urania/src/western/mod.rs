pub mod labels;
pub mod signs;

pub use labels::Language;
pub use signs::{
    longitude_to_sign, normalize_degree, Element, Modality, Sign, SignPlacement, ELEMENTS,
    MODALITIES, SIGNS,
};
