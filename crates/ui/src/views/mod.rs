mod brand;
mod deck;
mod nav_rail;
mod not_found;
mod slides;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use deck::DeckView;
pub use not_found::NotFoundView;
