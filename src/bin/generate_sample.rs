use std::fs;

/// Minimal deterministic PRNG (64-bit LCG), enough for sample data.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 11
    }

    fn in_range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() as usize) % items.len()]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let titles = [
        "The Long Night", "Paper Moons", "Iron Harbor", "Quiet Streets",
        "Second Sunrise", "The Cartographer", "Glass Orchard", "Northern Line",
        "Ashes of August", "The Last Reel",
    ];
    let title_types = ["Movie", "TV Series", "Short", "Video Game", "TV Mini Series"];
    let genre_pool = [
        "Action", "Adventure", "Animation", "Comedy", "Crime", "Drama",
        "Game-Show", "Mystery", "Romance", "Sci-Fi", "Thriller", "Video Game",
    ];
    let directors = [
        "R. Calloway", "M. Ostrowski", "J. Pereira", "A. Lindqvist", "T. Okafor",
    ];

    fs::create_dir_all("public").expect("Failed to create public/");
    let mut writer =
        csv::Writer::from_path("public/OGiMDB.csv").expect("Failed to create public/OGiMDB.csv");

    writer
        .write_record([
            "Position", "Const", "Created", "Title", "Title Type", "IMDb Rating",
            "Runtime (mins)", "Year", "Genres", "Num Votes", "Release Date",
            "Directors", "Your Rating", "URL",
        ])
        .expect("Failed to write header");

    let rows = 200;
    for i in 0..rows {
        let title = format!("{} {}", rng.pick(&titles), i / titles.len() + 1);
        let title_type = rng.pick(&title_types);

        // One to three genres, possibly including an excluded one.
        let n_genres = rng.in_range(1, 3);
        let mut genres: Vec<&str> = Vec::new();
        for _ in 0..n_genres {
            let g = rng.pick(&genre_pool);
            if !genres.contains(&g) {
                genres.push(g);
            }
        }

        let year = rng.in_range(1968, 2025);
        let rating = rng.in_range(40, 93) as f64 / 10.0;
        let votes = rng.in_range(1_500, 900_000);
        let runtime = rng.in_range(70, 180);

        writer
            .write_record([
                (i + 1).to_string(),
                format!("tt{:07}", 1_000_000 + i * 37),
                "2024-01-15".to_string(),
                title,
                title_type.to_string(),
                format!("{rating:.1}"),
                runtime.to_string(),
                year.to_string(),
                genres.join(", "),
                votes.to_string(),
                format!("{year}-06-01"),
                rng.pick(&directors).to_string(),
                rng.in_range(5, 10).to_string(),
                format!("https://www.imdb.com/title/tt{:07}/", 1_000_000 + i * 37),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");

    let size = fs::metadata("public/OGiMDB.csv").map(|m| m.len()).unwrap_or(0);
    println!("Wrote {rows} sample rows to public/OGiMDB.csv ({size} bytes)");
}
