use crate::models::Movie;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// In-memory movie collection, insertion-ordered. Every operation is a
/// linear scan, which is fine at this scale.
pub struct Catalog {
    movies: Vec<Movie>,
    next_id: i32,
}

impl Catalog {
    /// The three records the service boots with.
    pub fn seeded() -> Self {
        let movies = vec![
            Movie {
                id: Some(1),
                title: "Avatar".to_string(),
                overview: "En un exuberante planeta llamado Pandora viven los Na'vi, seres que ..."
                    .to_string(),
                year: 2009,
                rating: 7.8,
                category: "Acción".to_string(),
            },
            Movie {
                id: Some(2),
                title: "Avatar".to_string(),
                overview: "En un exuberante planeta llamado Pandora viven los Na'vi, seres que ..."
                    .to_string(),
                year: 2009,
                rating: 7.8,
                category: "Acción".to_string(),
            },
            Movie {
                id: Some(3),
                title: "Titanic".to_string(),
                overview: "Jack (Leonardo DiCaprio) es un joven artista que, en una partida de ..."
                    .to_string(),
                year: 1997,
                rating: 7.8,
                category: "Drama".to_string(),
            },
        ];

        Catalog { movies, next_id: 4 }
    }

    pub fn shared() -> SharedCatalog {
        Arc::new(Mutex::new(Catalog::seeded()))
    }

    pub fn list_all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    pub fn get_by_id(&self, id: i32) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == Some(id))
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.category == category)
            .cloned()
            .collect()
    }

    /// Appends a record. A record without an id gets the next counter
    /// value; an explicit id is kept unchanged and the counter advances
    /// past it. Explicit ids are not checked for uniqueness.
    pub fn insert(&mut self, mut movie: Movie) -> Movie {
        match movie.id {
            None => {
                movie.id = Some(self.next_id);
                self.next_id += 1;
            }
            Some(id) => {
                if id >= self.next_id {
                    self.next_id = id + 1;
                }
            }
        }
        self.movies.push(movie.clone());
        movie
    }

    /// Overwrites the fields of the first record matching `id`, keeping
    /// the id itself. Returns the updated record.
    pub fn update_by_id(&mut self, id: i32, fields: &Movie) -> Option<Movie> {
        let movie = self.movies.iter_mut().find(|movie| movie.id == Some(id))?;
        movie.title = fields.title.clone();
        movie.overview = fields.overview.clone();
        movie.year = fields.year;
        movie.rating = fields.rating;
        movie.category = fields.category.clone();
        Some(movie.clone())
    }

    /// Removes the first record matching `id`.
    pub fn delete_by_id(&mut self, id: i32) -> bool {
        match self.movies.iter().position(|movie| movie.id == Some(id)) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }
}
