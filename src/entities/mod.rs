// Entity Models
//
// Each entity mirrors one JSON document shape in the data directory:
// - CountryRecord: one entry of countries.json / countries/<CODE>.json
// - MetadataRecord: metadata.json

pub mod country;
pub mod metadata;

pub use country::{
    ConsultationPaper, CountryMap, CountryRecord, LegalFrameworkItem, Regulation, Source,
    Whitepaper,
};
pub use metadata::{MetadataRecord, DATA_SOURCE};
