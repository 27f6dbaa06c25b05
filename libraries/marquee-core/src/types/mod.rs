mod collection;
mod movie;
mod settings;

pub use collection::{
    Collection, CollectionRecord, CollectionStatus, CuratedCollection, ExternalCollection,
};
pub use movie::{Candidate, ExternalList, ListEntry};
pub use settings::{SelectOption, Settings, SettingsResponse};
