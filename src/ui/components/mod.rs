mod movie_card;
mod movie_search;

pub use movie_card::MovieCard;
pub use movie_search::MovieSearch;
