pub mod client;
pub mod criteria;
pub mod error;
pub mod extract;
pub mod labels;
pub mod mapper;

pub use client::RegistryClient;
pub use criteria::SearchCriteria;
pub use error::RegistryError;
pub use extract::{extract_label_map, LabelValueMap};
pub use mapper::{map_record, parse_expiration_date};
