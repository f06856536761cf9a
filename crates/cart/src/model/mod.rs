mod entry;

pub use self::entry::CartEntry;
