//! Built-in film collection returned when the data file is missing or
//! unparseable.

use super::types::Film;

fn film(
    id: u64,
    title: &str,
    director: &str,
    duration: f64,
    budget: f64,
    description: &str,
    image_url: &str,
) -> Film {
    Film {
        id,
        title: title.to_string(),
        director: director.to_string(),
        duration,
        budget: Some(budget),
        description: Some(description.to_string()),
        image_url: Some(image_url.to_string()),
    }
}

/// The seeded collection
pub fn default_films() -> Vec<Film> {
    vec![
        film(
            1,
            "Inception",
            "Christopher Nolan",
            148.0,
            160_000_000.0,
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a CEO.",
            "https://example.com/inception.jpg",
        ),
        film(
            2,
            "The Matrix",
            "Lana Wachowski, Lilly Wachowski",
            136.0,
            63_000_000.0,
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
            "https://example.com/matrix.jpg",
        ),
        film(
            3,
            "Interstellar",
            "Christopher Nolan",
            169.0,
            165_000_000.0,
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "https://example.com/interstellar.jpg",
        ),
        film(
            4,
            "Past Lives",
            "Celine Song",
            105.0,
            11_000_000.0,
            "Two childhood friends reunite after decades apart, exploring the complexities of love and destiny.",
            "https://example.com/pastlives.jpg",
        ),
    ]
}
