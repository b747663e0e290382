use std::process::ExitCode;

use rusty_maze::check::{read_input, verify};

/// Lit un document JSON (chemin en argument, sinon l'entrée standard) et
/// affiche le verdict sur une ligne.
fn main() -> anyhow::Result<ExitCode> {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let path = std::env::args().nth(1);
    let input = read_input(path.as_deref())?;
    let (verdict, status) = verify(&input)?;
    println!("{}", serde_json::to_string(&verdict)?);

    Ok(ExitCode::from(status))
}
