mod entry;
mod user;

pub use entry::RegistryEntry;
pub use user::UserRecord;
