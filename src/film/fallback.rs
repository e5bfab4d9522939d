use rand::Rng;

use crate::film::Film;

struct StaticFilm {
    title: &'static str,
    description: &'static str,
    year: &'static str,
    score: &'static str,
    poster: &'static str,
    trailer: &'static str,
}

const FALLBACK_FILMS: [StaticFilm; 3] = [
    StaticFilm {
        title: "Spirited Away",
        description: "A young girl enters a spirit world to save her parents and find her way home.",
        year: "2001",
        score: "97",
        poster: "https://images.unsplash.com/photo-1502134249126-9f3755a50d78?auto=format&fit=crop&w=800&q=80",
        trailer: "https://www.youtube.com/watch?v=ByXuk9QqQkk",
    },
    StaticFilm {
        title: "My Neighbor Totoro",
        description: "Two sisters meet magical forest spirits while adapting to life in the countryside.",
        year: "1988",
        score: "93",
        poster: "https://images.unsplash.com/photo-1524985069026-dd778a71c7b4?auto=format&fit=crop&w=800&q=80",
        trailer: "https://www.youtube.com/watch?v=92a7Hj0ijLs",
    },
    StaticFilm {
        title: "Princess Mononoke",
        description: "A prince caught between humans and forest gods seeks balance and peace.",
        year: "1997",
        score: "94",
        poster: "https://images.unsplash.com/photo-1523475472560-d2df97ec485c?auto=format&fit=crop&w=800&q=80",
        trailer: "https://www.youtube.com/watch?v=4OiMOHRDs14",
    },
];

impl From<&StaticFilm> for Film {
    fn from(f: &StaticFilm) -> Self {
        Self {
            title: f.title.to_owned(),
            description: f.description.to_owned(),
            year: f.year.to_owned(),
            score: f.score.to_owned(),
            poster: f.poster.to_owned(),
            trailer: f.trailer.to_owned(),
        }
    }
}

/// The bundled films served when the catalog is unreachable.
#[must_use]
pub fn fallback_films() -> Vec<Film> {
    FALLBACK_FILMS.iter().map(Film::from).collect()
}

pub(crate) fn random_film() -> Film {
    let i = rand::thread_rng().gen_range(0..FALLBACK_FILMS.len());
    Film::from(&FALLBACK_FILMS[i])
}
