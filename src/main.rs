use anyhow::Result;

fn main() -> Result<()> {
    spotify_data_prep::cli::run()
}
