mod listing;
pub use self::listing::{total_pages, ListingPage, NamedResource};

mod pokemon;
pub use self::pokemon::{NamedType, Pokemon, PokemonStat, PokemonType, Sprites, StatName};
