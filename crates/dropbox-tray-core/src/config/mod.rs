mod locator;

pub use locator::ConfigLocator;

/// Location of the Dropbox info file, relative to the user's home directory.
pub(crate) const INFO_FILE: &str = ".dropbox/info.json";
