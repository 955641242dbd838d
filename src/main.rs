use geogamr::build_info;
use geogamr::config::{Command, Config, HELP_TEXT};
use geogamr::ui::{App, Console};
use geogamr::{logging, Catalog, GeoError, LeaderboardStore};

fn main() {
    logging::init();

    let config = match Command::from_env() {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", HELP_TEXT);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        match e {
            GeoError::DatasetMissing { .. } => {
                eprintln!("Game files missing... can't start. ({})", e)
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(config: Config) -> geogamr::Result<()> {
    let catalog = Catalog::load(&config.data_path)?;
    let store = match config.scores_dir {
        Some(dir) => LeaderboardStore::new(dir),
        None => LeaderboardStore::in_home()?,
    };

    let mut app = App::new(Console::stdio(), &catalog, &store, rand::thread_rng());
    app.run()
}
