mod common;
pub use self::common::Query;

mod listing;
pub use self::listing::ListingQuery;
